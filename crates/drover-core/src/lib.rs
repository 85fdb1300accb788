pub mod catalog;
pub mod error;
pub mod similarity;

pub use catalog::{Catalog, CatalogEntry, PlatformDownload, TARGET_PLATFORM};
pub use error::{Error, Result};
