//! Engine error types.

use thiserror::Error;

/// Usage errors raised by the engine.
///
/// These are programming mistakes (an unknown rule name in the string
/// notation, malformed rule arguments), not validation failures.
/// Validation failures are ordinary values; see
/// [`FieldError`](crate::FieldError).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A validation rule name that is not in the catalog.
    #[error("unknown validation rule `{0}`")]
    UnknownCheck(String),

    /// A filter rule name that is not in the catalog.
    #[error("unknown filter rule `{0}`")]
    UnknownTransform(String),

    /// A rule token whose arguments could not be parsed.
    #[error("rule `{rule}` expects {expected}")]
    BadArgs {
        /// The rule name as written.
        rule: String,
        /// Human description of the expected arguments.
        expected: &'static str,
    },
}
