use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum PathTreeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
impl PathTreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PathTreeError::Io {
            path: path.into(),
            source,
        }
    }
}
