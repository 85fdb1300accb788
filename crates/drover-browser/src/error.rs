use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Version key not found in browser manifest")]
    VersionKeyMissing,

    #[error("Failed to parse browser manifest: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session error: {0}")]
    Session(String),
}

pub type Result<T> = std::result::Result<T, Error>;
