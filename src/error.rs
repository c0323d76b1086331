use std::path::PathBuf;
use thiserror::Error;

use crate::types::RecordId;

#[derive(Error, Debug)]
pub enum UserdeskError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Delete of user {id} rejected (status {status})")]
    DeleteRejected { id: RecordId, status: u16 },

    #[error("User not found in table: {0}")]
    UserNotFound(RecordId),
}

pub type Result<T> = std::result::Result<T, UserdeskError>;
