use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the data file to `dest`, optionally replacing the copy with a zip
    /// archive. Returns the path of the file actually written.
    pub fn backup(src: &Path, dest: &Path, compress: bool, force: bool) -> AppResult<PathBuf> {
        if !src.exists() {
            return Err(AppError::NotFound(format!(
                "data file {} (nothing saved yet?)",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        ensure_writable(&target, force)?;

        if compress {
            compress_into(src, &target)?;
        } else {
            fs::copy(src, &target)?;
        }

        info!(src = %src.display(), dest = %target.display(), compress, "backup written");
        Ok(target)
    }

    /// Default backup name next to the data file, stamped with the current time.
    pub fn default_destination(src: &Path) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let stem = src
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "rhabitlog".to_string());
        let ext = src
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_else(|| "bak".to_string());
        src.with_file_name(format!("{stem}_backup_{stamp}.{ext}"))
    }
}

fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rhabitlog-data".to_string());

    zip.start_file(entry, options)
        .map_err(std::io::Error::other)?;

    let mut f = fs::File::open(src)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(|e| {
        warn!(path = %zip_path.display(), error = %e, "zip finalisation failed");
        std::io::Error::other(e)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_compressed_backups() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("rhabitlog-state.json");
        fs::write(&src, "{\"settings\":{}}").unwrap();

        let plain = BackupLogic::backup(&src, &tmp.path().join("copy.json"), false, true).unwrap();
        assert_eq!(fs::read_to_string(&plain).unwrap(), "{\"settings\":{}}");

        let zipped = BackupLogic::backup(&src, &tmp.path().join("copy.json"), true, true).unwrap();
        assert_eq!(zipped.extension().unwrap(), "zip");

        let mut archive = zip::ZipArchive::new(fs::File::open(&zipped).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(archive.by_index(0).unwrap().name(), "rhabitlog-state.json");
    }

    #[test]
    fn missing_source_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let err = BackupLogic::backup(
            &tmp.path().join("nope.json"),
            &tmp.path().join("out.json"),
            false,
            true,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
