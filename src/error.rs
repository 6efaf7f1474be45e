// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GolingError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database Error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Serialization Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config Error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Editor exited with a non-zero status")]
    EditorError,

    #[error("Log {0} not found")]
    LogNotFound(String),

    #[error("Stored value under '{key}' is corrupt: {source}")]
    CorruptBlob {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored schema version '{0}' is not a number")]
    CorruptSchemaVersion(String),

    #[error("Storage schema version {found} is newer than supported version {supported}")]
    UnsupportedSchema { found: u32, supported: u32 },

    #[error("Positioning failed: {0}")]
    Position(String),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, GolingError>;
