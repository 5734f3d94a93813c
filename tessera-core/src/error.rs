use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Problems found while reading an access control list out of a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("field `{path}` must be {expected}")]
    InvalidType {
        path: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
