use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parsing error")]
    Parse,
    #[error("Storage error: {0} {1}")]
    Storage(String, String),
    #[error("Malformed taste catalog: {0}")]
    Catalog(String),
    #[error("Graph is inconsistent: {0}")]
    Inconsistent(String),
    #[error("Graph lock is poisoned")]
    Lock,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for GraphError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}

impl<T> From<std::sync::PoisonError<T>> for GraphError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::Lock
    }
}
