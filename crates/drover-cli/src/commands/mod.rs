pub mod fetch;
pub mod resolve;
pub mod version;
