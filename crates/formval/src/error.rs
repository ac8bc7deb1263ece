//! Error types for the fluent layer.

use formval_engine::EngineError;
use thiserror::Error;

/// Errors surfaced by [`Validator`](crate::Validator) entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidateError {
    /// Validation failed and no success path exists.
    ///
    /// The message text is the historical default, kept verbatim
    /// (misspelling included) for compatibility with callers matching on
    /// it.
    #[error("vaildate if fallen")]
    Invalid,

    /// Validation failed with a caller-supplied message.
    #[error("{0}")]
    Message(String),

    /// A usage error from the rule engine, propagated unchanged.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ValidateError {
    /// A failure with a caller-supplied message.
    pub fn message(text: impl Into<String>) -> Self {
        ValidateError::Message(text.into())
    }
}
