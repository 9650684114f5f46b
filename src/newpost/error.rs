use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a target directory was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryProblem {
    NotADirectory,
    NotWritable,
}

impl fmt::Display for DirectoryProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryProblem::NotADirectory => write!(f, "not a directory"),
            DirectoryProblem::NotWritable => write!(f, "not writable"),
        }
    }
}

#[derive(Error, Debug)]
pub enum NewpostError {
    #[error("Invalid directory {}: {reason}", path.display())]
    InvalidDirectory {
        path: PathBuf,
        reason: DirectoryProblem,
    },

    #[error("Post file already exists, refusing to overwrite: {}", .0.display())]
    FileCollision(PathBuf),

    #[error("Failed to launch editor '{editor}': {source}")]
    Launch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Usage error: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, NewpostError>;
