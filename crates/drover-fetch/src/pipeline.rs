use crate::client::CatalogClient;
use crate::error::{Error, Result};
use crate::{archive, download, permissions};
use drover_core::TARGET_PLATFORM;
use std::path::{Path, PathBuf};

/// Name of the relocated driver executable
pub const DRIVER_EXECUTABLE: &str = "chromedriver";

/// Name given to the downloaded archive inside the destination directory
pub const ARCHIVE_NAME: &str = "chromedriver.zip";

/// Directory the archive is expected to extract to
fn extracted_dir_name() -> String {
    format!("{DRIVER_EXECUTABLE}-{TARGET_PLATFORM}")
}

/// Download the archive at `url` and leave a ready-to-run chromedriver in
/// `dest_dir`.
///
/// Steps: stream the archive to `<dest>/chromedriver.zip`, extract it,
/// move the executable out of the extracted `chromedriver-mac-x64`
/// directory to the destination root, delete the archive and the
/// extracted directory, and mark the executable owner-rwx. Returns the
/// final executable path.
///
/// There is no rollback: a failing step may leave the archive or a
/// partially extracted directory behind.
pub async fn fetch_driver(
    http: &reqwest::Client,
    url: &str,
    dest_dir: &Path,
) -> Result<PathBuf> {
    let archive_path = dest_dir.join(ARCHIVE_NAME);
    download::download_archive(http, url, &archive_path).await?;

    archive::extract_zip(&archive_path, dest_dir)?;

    let extracted_dir = dest_dir.join(extracted_dir_name());
    let source_path = extracted_dir.join(DRIVER_EXECUTABLE);
    if !source_path.exists() {
        return Err(Error::MissingArtifact(source_path));
    }

    let driver_path = dest_dir.join(DRIVER_EXECUTABLE);
    std::fs::rename(&source_path, &driver_path)?;

    std::fs::remove_file(&archive_path)?;
    std::fs::remove_dir_all(&extracted_dir)?;

    permissions::make_executable(&driver_path)?;

    tracing::info!("Driver ready at: {}", driver_path.display());
    Ok(driver_path)
}

/// Resolve the best catalog match for `browser_version` and fetch it into
/// `dest_dir`, returning the final executable path
pub async fn acquire(
    catalog: &CatalogClient,
    dest_dir: &Path,
    browser_version: &str,
) -> Result<PathBuf> {
    let url = catalog.resolve_download_url(browser_version).await?;
    fetch_driver(catalog.http(), &url, dest_dir).await
}
