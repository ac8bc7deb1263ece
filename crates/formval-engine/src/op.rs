//! Operation records: the units a field's rule chain is made of.
//!
//! A validation chain is a list of [`Op`]s (a [`Check`] plus a negation
//! flag and an optional override message); a filter chain is a list of
//! [`Transform`]s. Both catalogs can also be parsed from the legacy
//! pipe-joined string notation (`"required|min_len,5"`).

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// A validation predicate from the engine catalog.
///
/// Arguments are part of the variant, so a chain is fully described by
/// data and can be serialized or compared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Check {
    /// Value must be present and non-blank.
    Required,
    /// Value must equal one of the allowed values.
    Contains { allowed: Vec<String> },
    /// Value must be at least `min` characters.
    MinLen { min: usize },
    /// Value must be at most `max` characters.
    MaxLen { max: usize },
    /// Value must be exactly `len` characters.
    ExactLen { len: usize },
    /// Value length must fall within `min..=max`.
    BetweenLen { min: usize, max: usize },
    /// Letters only.
    Alpha,
    /// Letters and digits only.
    AlphaNumeric,
    /// Letters, digits, dashes and underscores.
    AlphaDash,
    /// Letters and spaces only.
    AlphaSpace,
    /// Parses as a number.
    Numeric,
    /// Parses as a whole number.
    Integer,
    /// A boolean-ish token: true/false/1/0.
    Boolean,
    /// A syntactically valid email address.
    ValidEmail,
    /// A syntactically valid URL.
    ValidUrl,
    /// Numeric value must be at least `min`.
    MinNumeric { min: f64 },
    /// Numeric value must be at most `max`.
    MaxNumeric { max: f64 },
    /// Value must start with `prefix`.
    Starts { prefix: String },
    /// Value must end with `suffix`.
    Ends { suffix: String },
    /// Value must match the regex `pattern`.
    Regex { pattern: String },
}

impl Check {
    /// The catalog name of this check, as used in error codes, message
    /// templates and the string rule notation.
    pub fn name(&self) -> &'static str {
        match self {
            Check::Required => "required",
            Check::Contains { .. } => "contains",
            Check::MinLen { .. } => "min_len",
            Check::MaxLen { .. } => "max_len",
            Check::ExactLen { .. } => "exact_len",
            Check::BetweenLen { .. } => "between_len",
            Check::Alpha => "alpha",
            Check::AlphaNumeric => "alpha_numeric",
            Check::AlphaDash => "alpha_dash",
            Check::AlphaSpace => "alpha_space",
            Check::Numeric => "numeric",
            Check::Integer => "integer",
            Check::Boolean => "boolean",
            Check::ValidEmail => "valid_email",
            Check::ValidUrl => "valid_url",
            Check::MinNumeric { .. } => "min_numeric",
            Check::MaxNumeric { .. } => "max_numeric",
            Check::Starts { .. } => "starts",
            Check::Ends { .. } => "ends",
            Check::Regex { .. } => "regex",
        }
    }

    /// Message-template parameters for this check.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Check::Contains { allowed } => vec![("allowed", allowed.join(", "))],
            Check::MinLen { min } => vec![("min", min.to_string())],
            Check::MaxLen { max } => vec![("max", max.to_string())],
            Check::ExactLen { len } => vec![("len", len.to_string())],
            Check::BetweenLen { min, max } => {
                vec![("min", min.to_string()), ("max", max.to_string())]
            }
            Check::MinNumeric { min } => vec![("min", min.to_string())],
            Check::MaxNumeric { max } => vec![("max", max.to_string())],
            Check::Starts { prefix } => vec![("prefix", prefix.clone())],
            Check::Ends { suffix } => vec![("suffix", suffix.clone())],
            Check::Regex { pattern } => vec![("pattern", pattern.clone())],
            _ => Vec::new(),
        }
    }

    /// Parse one check token from the string notation.
    ///
    /// The token is the rule name, optionally followed by a comma and its
    /// arguments; multiple arguments are separated by semicolons
    /// (`"between_len,3;11"`, `"contains,yes;no"`).
    pub fn parse(token: &str) -> Result<Self, EngineError> {
        let (name, arg) = match token.split_once(',') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (token.trim(), None),
        };

        let bad_args = |expected: &'static str| EngineError::BadArgs {
            rule: name.to_string(),
            expected,
        };
        let usize_arg = |expected: &'static str| -> Result<usize, EngineError> {
            arg.and_then(|a| a.parse().ok()).ok_or_else(|| bad_args(expected))
        };
        let f64_arg = |expected: &'static str| -> Result<f64, EngineError> {
            arg.and_then(|a| a.parse().ok()).ok_or_else(|| bad_args(expected))
        };
        let str_arg = |expected: &'static str| -> Result<String, EngineError> {
            arg.map(str::to_string).ok_or_else(|| bad_args(expected))
        };

        match name {
            "required" => Ok(Check::Required),
            "contains" => {
                let raw = str_arg("a semicolon-separated value list")?;
                Ok(Check::Contains {
                    allowed: raw.split(';').map(|v| v.trim().to_string()).collect(),
                })
            }
            "min_len" => Ok(Check::MinLen {
                min: usize_arg("a length")?,
            }),
            "max_len" => Ok(Check::MaxLen {
                max: usize_arg("a length")?,
            }),
            "exact_len" => Ok(Check::ExactLen {
                len: usize_arg("a length")?,
            }),
            "between_len" => {
                let raw = str_arg("two lengths separated by a semicolon")?;
                let bounds = raw
                    .split_once(';')
                    .and_then(|(lo, hi)| Some((lo.trim().parse().ok()?, hi.trim().parse().ok()?)));
                match bounds {
                    Some((min, max)) => Ok(Check::BetweenLen { min, max }),
                    None => Err(bad_args("two lengths separated by a semicolon")),
                }
            }
            "alpha" => Ok(Check::Alpha),
            "alpha_numeric" => Ok(Check::AlphaNumeric),
            "alpha_dash" => Ok(Check::AlphaDash),
            "alpha_space" => Ok(Check::AlphaSpace),
            "numeric" => Ok(Check::Numeric),
            "integer" => Ok(Check::Integer),
            "boolean" => Ok(Check::Boolean),
            "valid_email" => Ok(Check::ValidEmail),
            "valid_url" => Ok(Check::ValidUrl),
            "min_numeric" => Ok(Check::MinNumeric {
                min: f64_arg("a number")?,
            }),
            "max_numeric" => Ok(Check::MaxNumeric {
                max: f64_arg("a number")?,
            }),
            "starts" => Ok(Check::Starts {
                prefix: str_arg("a prefix")?,
            }),
            "ends" => Ok(Check::Ends {
                suffix: str_arg("a suffix")?,
            }),
            "regex" => Ok(Check::Regex {
                pattern: str_arg("a pattern")?,
            }),
            other => Err(EngineError::UnknownCheck(other.to_string())),
        }
    }
}

/// A sanitization transform from the engine catalog.
///
/// Transforms compose left to right: the output of one feeds the next.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Strip leading and trailing whitespace.
    Trim,
    /// Strip leading whitespace.
    LTrim,
    /// Strip trailing whitespace.
    RTrim,
    /// Uppercase the whole value.
    UpperCase,
    /// Lowercase the whole value.
    LowerCase,
    /// Uppercase the first character.
    Capitalize,
    /// Lowercased, dash-separated URL slug.
    Slug,
    /// Remove all whitespace.
    StripSpace,
    /// Keep only the digits.
    WholeNumber,
}

impl Transform {
    /// The catalog name of this transform.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Trim => "trim",
            Transform::LTrim => "ltrim",
            Transform::RTrim => "rtrim",
            Transform::UpperCase => "upper_case",
            Transform::LowerCase => "lower_case",
            Transform::Capitalize => "capitalize",
            Transform::Slug => "slug",
            Transform::StripSpace => "strip_space",
            Transform::WholeNumber => "whole_number",
        }
    }

    /// Parse one transform token from the string notation.
    pub fn parse(token: &str) -> Result<Self, EngineError> {
        match token.trim() {
            "trim" => Ok(Transform::Trim),
            "ltrim" => Ok(Transform::LTrim),
            "rtrim" => Ok(Transform::RTrim),
            "upper_case" => Ok(Transform::UpperCase),
            "lower_case" => Ok(Transform::LowerCase),
            "capitalize" => Ok(Transform::Capitalize),
            "slug" => Ok(Transform::Slug),
            "strip_space" => Ok(Transform::StripSpace),
            "whole_number" => Ok(Transform::WholeNumber),
            other => Err(EngineError::UnknownTransform(other.to_string())),
        }
    }
}

/// One step of a validation chain: a [`Check`], a negation flag, and an
/// optional override message used instead of the locale template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Op {
    /// The predicate to evaluate.
    #[serde(flatten)]
    pub check: Check,
    /// Negate the predicate's outcome.
    #[serde(default)]
    pub negated: bool,
    /// Override message for this operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Op {
    /// Plain (non-negated) operation with the default message.
    pub fn new(check: Check) -> Self {
        Self {
            check,
            negated: false,
            message: None,
        }
    }

    /// Negated operation with the default message.
    pub fn negated(check: Check) -> Self {
        Self {
            check,
            negated: true,
            message: None,
        }
    }
}

impl From<Check> for Op {
    fn from(check: Check) -> Self {
        Op::new(check)
    }
}

/// Parse a pipe-joined validation chain (`"required|min_len,5"`).
pub fn parse_checks(raw: &str) -> Result<Vec<Check>, EngineError> {
    raw.split('|')
        .filter(|token| !token.trim().is_empty())
        .map(Check::parse)
        .collect()
}

/// Parse a pipe-joined filter chain (`"trim|lower_case"`).
pub fn parse_transforms(raw: &str) -> Result<Vec<Transform>, EngineError> {
    raw.split('|')
        .filter(|token| !token.trim().is_empty())
        .map(Transform::parse)
        .collect()
}
