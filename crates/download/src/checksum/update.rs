//! Batch regeneration of the known-checksums table.
//!
//! Offline maintenance path, run manually or on a schedule when upstream
//! publishes releases. Not part of the runtime download pipeline, though it
//! shares the key derivation and resolution logic with it.

use std::path::Path;
use tracing::{debug, info};

use super::{AssetFetcher, ChecksumResolver, checksum_key};
use crate::Result;

/// Header marking the output as machine-generated.
const HEADER: &str = "// AUTOGENERATED_DO_NOT_EDIT";

/// Rewrite the generated known-checksums source file from a list of
/// checksum-file download URLs.
///
/// One entry per URL, in input order; URLs whose key derivation yields no
/// key (source archives) are skipped. Checksums come from the resolver, so
/// entries already in its table cost no fetch. The file is replaced
/// wholesale.
pub async fn update_known_checksums<F: AssetFetcher>(
    path: &Path,
    download_urls: &[String],
    resolver: &ChecksumResolver<F>,
) -> Result<()> {
    let mut output = String::new();
    output.push_str(HEADER);
    output.push_str("\npub static KNOWN_CHECKSUMS: &[(&str, &str)] = &[\n");

    let mut entries = 0usize;
    for url in download_urls {
        let Some(key) = checksum_key(url)? else {
            debug!(%url, "Skipping asset without checksum key");
            continue;
        };
        let checksum = resolver.resolve(&key, url).await?;
        output.push_str(&format!("    ({key:?}, {checksum:?}),\n"));
        entries += 1;
    }

    output.push_str("];\n");
    tokio::fs::write(path, output).await?;
    info!(path = %path.display(), entries, "Rewrote known-checksums table");
    Ok(())
}
