//! Predicate evaluation for the [`Check`] catalog.

use crate::op::Check;
use regex::Regex;
use std::sync::OnceLock;

// Pre-compiled regex patterns
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        // RFC 5322 simplified email regex
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
        ).unwrap()
    })
}

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| Regex::new(r"^(https?|ftp)://[^\s/$.?#].[^\s]*$").unwrap())
}

impl Check {
    /// Evaluate this predicate against a present value.
    ///
    /// Absent values are handled by the engine before this is called;
    /// here `value` is always the raw field input.
    pub fn eval(&self, value: &str) -> bool {
        match self {
            Check::Required => !value.trim().is_empty(),
            Check::Contains { allowed } => allowed.iter().any(|candidate| candidate == value),
            Check::MinLen { min } => value.chars().count() >= *min,
            Check::MaxLen { max } => value.chars().count() <= *max,
            Check::ExactLen { len } => value.chars().count() == *len,
            Check::BetweenLen { min, max } => {
                let len = value.chars().count();
                len >= *min && len <= *max
            }
            Check::Alpha => !value.is_empty() && value.chars().all(char::is_alphabetic),
            Check::AlphaNumeric => !value.is_empty() && value.chars().all(char::is_alphanumeric),
            Check::AlphaDash => {
                !value.is_empty()
                    && value
                        .chars()
                        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
            }
            Check::AlphaSpace => {
                !value.is_empty() && value.chars().all(|c| c.is_alphabetic() || c == ' ')
            }
            Check::Numeric => value.parse::<f64>().is_ok(),
            Check::Integer => value.parse::<i64>().is_ok(),
            Check::Boolean => {
                matches!(
                    value.to_ascii_lowercase().as_str(),
                    "true" | "false" | "1" | "0"
                )
            }
            Check::ValidEmail => email_regex().is_match(value),
            Check::ValidUrl => url_regex().is_match(value),
            Check::MinNumeric { min } => value.parse::<f64>().is_ok_and(|n| n >= *min),
            Check::MaxNumeric { max } => value.parse::<f64>().is_ok_and(|n| n <= *max),
            Check::Starts { prefix } => value.starts_with(prefix.as_str()),
            Check::Ends { suffix } => value.ends_with(suffix.as_str()),
            Check::Regex { pattern } => match Regex::new(pattern) {
                Ok(re) => re.is_match(value),
                Err(_) => {
                    // An unparsable pattern can never match.
                    tracing::warn!(%pattern, "invalid regex pattern in rule chain");
                    false
                }
            },
        }
    }
}
