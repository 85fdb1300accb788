use anyhow::Result;
use drover_fetch::CatalogClient;

pub fn execute(version: &str) -> Result<()> {
    anyhow::ensure!(!version.trim().is_empty(), "version must not be empty");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result: Result<()> = runtime.block_on(async {
        let catalog = CatalogClient::new();
        let url = catalog.resolve_download_url(version).await?;
        println!("{url}");
        Ok(())
    });

    runtime.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}
