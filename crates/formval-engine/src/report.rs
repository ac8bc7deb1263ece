//! Structured validation failure descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single failed operation: which field, which rule, and the rendered
/// message.
///
/// The message is rendered at execution time from (in order of
/// precedence) the operation's override message, then the locale
/// template; per-field overrides are applied later, when an error map is
/// read through the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed.
    pub field: String,
    /// The rule code (e.g. "required", "min_len").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for FieldError {}
