use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("No project named \"{input}\"")]
    UnknownProject { input: String },

    #[error("{} is already registered as \"{name}\"", path.display())]
    DuplicatePath { path: PathBuf, name: String },

    #[error("Failed to open terminal: {0}")]
    Terminal(std::io::Error),

    #[error("{0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("Failed to create {}: {source}", dir.display())]
    CreateDir {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}
