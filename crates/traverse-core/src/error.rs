use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraverseError {
    #[error("duplicate record field: {0}")]
    DuplicateField(String),

    #[error("unknown block: {0} (expected elements, entries, or enumerate)")]
    UnknownBlock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, TraverseError>;
