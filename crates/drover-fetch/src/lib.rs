pub mod archive;
pub mod client;
pub mod download;
pub mod error;
pub mod permissions;
pub mod pipeline;

pub use client::{CATALOG_URL, CatalogClient};
pub use error::{Error, Result};
pub use pipeline::{ARCHIVE_NAME, DRIVER_EXECUTABLE, acquire, fetch_driver};

#[cfg(test)]
pub(crate) mod testutil;
