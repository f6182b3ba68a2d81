use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory '{0}'")]
    DirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to write output file '{0}'")]
    FileWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to read raw data file '{0}'")]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse raw data file '{0}'")]
    RawParse(PathBuf, #[source] serde_json::Error),

    #[error("Failed to serialize the output document")]
    Serialize(#[source] serde_json::Error),
}
