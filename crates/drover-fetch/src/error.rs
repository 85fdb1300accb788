use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Browser version must not be empty")]
    EmptyVersion,

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] drover_core::Error),

    #[error("Expected artifact missing after extraction: {}", .0.display())]
    MissingArtifact(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
