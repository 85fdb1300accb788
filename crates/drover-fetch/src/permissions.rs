use crate::error::Result;
use std::path::Path;

/// Mark the file at `path` owner read/write/execute.
///
/// On targets without a POSIX permission model this is a no-op and never
/// fails the pipeline.
pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
        tracing::debug!("Marked executable: {}", path.display());
    }

    #[cfg(not(unix))]
    {
        let _ = path;
    }

    Ok(())
}
