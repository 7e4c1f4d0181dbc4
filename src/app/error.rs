use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VodostajError {
    #[error("Malformed feed entry: {0}")]
    MalformedEntry(String),

    #[error("Snapshot store corrupt at {path}: {reason}")]
    StoreCorrupt { path: PathBuf, reason: String },

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Options [offset] and --save are mutually exclusive, could not save state")]
    SaveWithOffset,

    #[error("Unknown station: {0}")]
    UnknownStation(String),

    #[error("No archived captures")]
    EmptyArchive,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Snapshot encoding error: {0}")]
    SnapshotEncode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VodostajError>;
