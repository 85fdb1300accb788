mod error;
mod probe;
mod session;

pub use error::{Error, Result};
pub use probe::{CHROME_MANIFEST_PATH, VERSION_KEY, installed_version, version_from_manifest};
pub use session::{DEFAULT_BROWSER_FLAGS, DriverSession, SessionBuilder};
