// AUTOGENERATED_DO_NOT_EDIT
pub static KNOWN_CHECKSUMS: &[(&str, &str)] = &[
    ("aarch64-apple-darwin-0.5.0", "8b3d68ec802589a1e5e3cc9b2e1bf80f1db637a4eb1bbcb309f6cb3ead853c53"),
    ("x86_64-apple-darwin-0.5.0", "35a494eda86d5c430186ca50926953e3e92677bdad31433e00c7a2631700872f"),
    ("aarch64-unknown-linux-gnu-0.5.0", "fef5054194141398dee6774d68e232096e673417eb0f54e33a16856382456f25"),
    ("x86_64-unknown-linux-gnu-0.5.0", "5703d2f005098b223da8d64ebe6e787427e0f8eb5be6ac982078ff9bf2242fb8"),
    ("armv7-unknown-linux-gnu-0.5.0", "8e2ec4011c917376f159f3fa9018d9ceef798fda35002fecf10106766c223f87"),
    ("i686-unknown-linux-gnu-0.5.0", "bdeb71d87357ee053def34ba6d40b52b0e33d7e174300b0553575cdcd4f8cd72"),
    ("x86_64-unknown-linux-musl-0.5.0", "c04ad6fa947ff901fc3ff602ca3574b5a7ca506babc6492a9f74b2a9f743f82c"),
    ("x86_64-pc-windows-msvc-0.5.0", "8b978eed7c2bea4dfda873edd962b024f530fa7999f69abb12d765b0cd09e74b"),
    ("i686-pc-windows-msvc-0.5.0", "cd0d62093eeb3114feb569585a9ba94566331de5c1f15b0f8016322f9f14c458"),
    ("aarch64-apple-darwin-0.5.1", "66ca0738e43cfa7f453b2f106db530a4ea4e2ec5a1961fd4b67970688e6d4929"),
    ("x86_64-apple-darwin-0.5.1", "bc991cd2bcacf796f64e97787f1c84c79e55f3e1a3b92feaecc2776f83d6d194"),
    ("aarch64-unknown-linux-gnu-0.5.1", "a0ec0016c9463ace58e67b5bf0e4370b5037395f9c318be5d28c102b88e6bb1f"),
    ("x86_64-unknown-linux-gnu-0.5.1", "15fe7d34f7111427931e4a7914bbe6ed8b25aa57713ad256864e8a26ed7cd1b4"),
    ("armv7-unknown-linux-gnu-0.5.1", "59dda2bc13f04dec8b98fb8b744e7f27441ebafa8c6b225c8fb628418311bb5b"),
    ("i686-unknown-linux-gnu-0.5.1", "57663b70cad24775377b2fc0833f31dd4f7e60e13d11c8751d152bf2f3f98daf"),
    ("x86_64-unknown-linux-musl-0.5.1", "66e9317c0aded70bad038e8c4634efab61d845c472e461296c19688586e915c6"),
    ("x86_64-pc-windows-msvc-0.5.1", "1b2d3a030918cc617bfe8f76ea5bc75b64433288833a8edbcedcd43d416d50a7"),
    ("i686-pc-windows-msvc-0.5.1", "653cb514025d0d58f42f65fe3c7db5c387f4ad1256773f5bb6e799052ec0b575"),
    ("aarch64-apple-darwin-0.5.2", "3ebdc1cad3a6936947ae06ad31649a8345a112f79133a403b9ba48c0ee86d923"),
    ("x86_64-apple-darwin-0.5.2", "5792c9595aa0d49ebb50be334d59b95728b9bb8398cafa551fbb339257ce5240"),
    ("aarch64-unknown-linux-gnu-0.5.2", "c5e4adfd432da9680e99e159d8160cdcffbf770a01a516546e4ff0ce59b58e4e"),
    ("x86_64-unknown-linux-gnu-0.5.2", "f07920282d9ea30d37aef1611fdd22324e2e61bc1e8318078060ce64a6157f87"),
    ("armv7-unknown-linux-gnu-0.5.2", "fe1f1f9641cb16f1ab29361829fd3e892b7d4ce9b2292d1964388f1993fc2002"),
    ("i686-unknown-linux-gnu-0.5.2", "7219963b3428e41e9879818c3ff8579497c0fc986ab9a84796def5a7b9a30047"),
    ("x86_64-unknown-linux-musl-0.5.2", "1e9162cc6b65f63081ed373c4d8d21ae690c40aeb8a92d0026924fc3b5fab683"),
    ("x86_64-pc-windows-msvc-0.5.2", "c278f8a11765fb4b70de78f7a0dc2879584dd38ee9a2a83cdb64c0cfa99baf0a"),
    ("i686-pc-windows-msvc-0.5.2", "6af4ca3ec9de427f57acd13005b7e02edaa2bf5f38850afaee1955eb3a6465b1"),
];
