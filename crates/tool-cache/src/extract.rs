//! Archive extraction for downloaded release assets.
//!
//! Upstream publishes gzip-compressed tarballs for every platform family
//! except Windows, which gets zip archives. Both are extracted from memory;
//! the caller chooses the format explicitly rather than sniffing the file
//! extension.

use flate2::read::GzDecoder;
use std::io::{Cursor, Read};
use std::path::Path;
use tar::Archive;
use tracing::debug;

use crate::{Error, Result};

/// Extract a gzip-compressed tarball into `dest`.
pub fn extract_tar_gz(data: &[u8], dest: &Path) -> Result<()> {
    debug!(dest = %dest.display(), len = data.len(), "Extracting tar.gz");
    std::fs::create_dir_all(dest).map_err(|e| Error::io(e, dest, "create"))?;

    let decoder = GzDecoder::new(Cursor::new(data));
    let mut archive = Archive::new(decoder);
    archive
        .unpack(dest)
        .map_err(|e| Error::extract(e.to_string()))?;
    Ok(())
}

/// Extract a zip archive into `dest`.
///
/// Entries with paths escaping `dest` are skipped. Unix modes recorded in
/// the archive are restored.
pub fn extract_zip(data: &[u8], dest: &Path) -> Result<()> {
    debug!(dest = %dest.display(), len = data.len(), "Extracting zip");
    std::fs::create_dir_all(dest).map_err(|e| Error::io(e, dest, "create"))?;

    let cursor = Cursor::new(data);
    let mut archive = zip::ZipArchive::new(cursor).map_err(|e| Error::extract(e.to_string()))?;

    for index in 0..archive.len() {
        let mut file = archive
            .by_index(index)
            .map_err(|e| Error::extract(e.to_string()))?;

        let Some(enclosed) = file.enclosed_name() else {
            continue;
        };
        let outpath = dest.join(enclosed);

        if file.is_dir() {
            std::fs::create_dir_all(&outpath).map_err(|e| Error::io(e, &outpath, "create"))?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(e, parent, "create"))?;
        }
        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|e| Error::extract(e.to_string()))?;
        std::fs::write(&outpath, &content).map_err(|e| Error::io(e, &outpath, "write"))?;

        #[cfg(unix)]
        if let Some(mode) = file.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&outpath)
                .map_err(|e| Error::io(e, &outpath, "stat"))?
                .permissions();
            perms.set_mode(mode);
            std::fs::set_permissions(&outpath, perms)
                .map_err(|e| Error::io(e, &outpath, "chmod"))?;
        }
    }
    Ok(())
}
