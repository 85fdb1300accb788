use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no versions")]
    EmptyCatalog,

    #[error("No chromedriver download for platform: {0}")]
    PlatformNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
