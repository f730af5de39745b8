use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid task status: {0}")]
    InvalidStatus(String),

    #[error("Invalid task priority: {0}")]
    InvalidPriority(String),

    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("Malformed board state: {0}")]
    MalformedState(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}
