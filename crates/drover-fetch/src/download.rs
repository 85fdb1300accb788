use crate::error::{Error, Result};
use futures::StreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Stream the archive at `url` to `dest`.
///
/// A non-success response status is an error before anything is written.
/// Zero-length keep-alive chunks are skipped. No retry and no timeout:
/// transport failures propagate to the caller unmodified.
pub async fn download_archive(http: &reqwest::Client, url: &str, dest: &Path) -> Result<()> {
    tracing::debug!("Downloading archive from: {}", url);

    let response = http.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::HttpStatus {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let mut file = tokio::fs::File::create(dest).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
    }

    file.flush().await?;
    tracing::info!("Downloaded {} bytes to: {}", downloaded, dest.display());

    Ok(())
}
