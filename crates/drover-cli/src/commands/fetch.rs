use anyhow::Result;
use drover_fetch::CatalogClient;
use std::path::{Path, PathBuf};

pub fn execute(
    dest: &Path,
    browser_version: Option<String>,
    manifest: Option<PathBuf>,
) -> Result<()> {
    // Create tokio runtime for async operations
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result: Result<()> = runtime.block_on(async {
        // Step 1: Determine the Chrome version
        let version = match browser_version {
            Some(version) => {
                println!("🔢 Using supplied Chrome version: {version}");
                version
            }
            None => {
                println!("🔍 Probing installed Chrome version...");
                let version = match &manifest {
                    Some(path) => drover_browser::version_from_manifest(path)?,
                    None => drover_browser::installed_version()?,
                };
                println!("✅ Found Chrome {version}");
                version
            }
        };

        // Step 2: Resolve the matching chromedriver build
        println!("🌐 Resolving chromedriver download...");
        let catalog = CatalogClient::new();
        let url = catalog.resolve_download_url(&version).await?;
        tracing::debug!("Resolved download URL: {}", url);
        println!("✅ Matched: {url}");

        // Step 3: Download, extract, relocate, and mark executable
        println!("📦 Downloading and extracting archive...");
        let driver_path = drover_fetch::fetch_driver(catalog.http(), &url, dest).await?;
        println!("✅ chromedriver ready at: {}", driver_path.display());

        Ok(())
    });

    // Explicitly shutdown runtime with timeout to prevent hanging on blocking tasks
    runtime.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}
