use anyhow::Result;
use std::path::PathBuf;

pub fn execute(manifest: Option<PathBuf>) -> Result<()> {
    let version = match manifest {
        Some(path) => drover_browser::version_from_manifest(&path)?,
        None => drover_browser::installed_version()?,
    };

    println!("{version}");
    Ok(())
}
