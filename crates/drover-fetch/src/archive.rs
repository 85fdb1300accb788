use crate::error::{Error, Result};
use std::path::Path;

/// Extract a zip archive into `dest_dir`.
///
/// Directories nested in the archive are created as named; existing files
/// are overwritten without confirmation. Entries whose names escape the
/// destination directory are rejected.
pub fn extract_zip(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    tracing::debug!(
        "Extracting {} into {}",
        archive_path.display(),
        dest_dir.display()
    );

    let file = std::fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    std::fs::create_dir_all(dest_dir)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        // enclosed_name filters absolute paths and parent traversal
        let Some(entry_path) = entry.enclosed_name() else {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("unsafe path in archive entry {i}"),
            )));
        };
        let output_path = dest_dir.join(entry_path);

        if entry.is_dir() {
            std::fs::create_dir_all(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let mut outfile = std::fs::File::create(&output_path)?;
            std::io::copy(&mut entry, &mut outfile)?;
        }
    }

    Ok(())
}
