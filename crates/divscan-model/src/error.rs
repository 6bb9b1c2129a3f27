use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
