use std::path::PathBuf;

use thiserror::Error;
use wersy_core::WordId;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("'{0}' looks like a binary file")]
    Binary(PathBuf),

    #[error("No word at position {0}")]
    UnknownWord(WordId),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
