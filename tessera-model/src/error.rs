use thiserror::Error;

/// Errors produced by model constructors and token parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown {kind} token: {token:?}")]
    UnknownToken { kind: &'static str, token: String },
}

impl ModelError {
    pub(crate) fn unknown(kind: &'static str, token: &str) -> Self {
        ModelError::UnknownToken {
            kind,
            token: token.to_string(),
        }
    }
}
