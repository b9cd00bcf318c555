use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Missing pixel block: {0}")]
    MissingBlock(String),

    #[error("Missing property: {0}")]
    MissingProperty(String),

    #[error("Unknown pixel type: {0}")]
    UnknownPixelType(String),

    #[error("Failed to encode snapshot record: {0}")]
    SnapshotEncode(String),

    #[error("Failed to decode snapshot record: {0}")]
    SnapshotDecode(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CaptureError>;
