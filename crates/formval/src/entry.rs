//! Per-field rule chain builders.
//!
//! [`Valid`] and [`Filter`] are cheap handles over a shared chain. A pool
//! can bind one chain under several field names, so appending through any
//! handle is visible to every field the chain is bound to.

use crate::error::ValidateError;
use formval_engine::{parse_checks, parse_transforms, Check, Op, Transform};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A validation chain under construction.
///
/// Every catalog method appends one operation and returns `&Self`, so
/// calls chain:
///
/// ```rust
/// use formval::Valid;
///
/// let entry = Valid::new();
/// entry.required().min_len(3).message("too short");
/// assert_eq!(entry.ops().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Valid {
    chain: Rc<RefCell<Vec<Op>>>,
    negate_next: Cell<bool>,
}

impl Valid {
    /// A fresh, empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new handle over the same chain, for binding under another field
    /// name.
    pub(crate) fn share(&self) -> Self {
        Self {
            chain: Rc::clone(&self.chain),
            negate_next: Cell::new(false),
        }
    }

    fn push(&self, check: Check) -> &Self {
        let negated = self.negate_next.replace(false);
        self.chain.borrow_mut().push(Op {
            check,
            negated,
            message: None,
        });
        self
    }

    /// Negate the next appended operation.
    pub fn not(&self) -> &Self {
        self.negate_next.set(true);
        self
    }

    /// Attach an override message to the most recently appended
    /// operation. No-op on an empty chain.
    pub fn message(&self, text: impl Into<String>) -> &Self {
        if let Some(op) = self.chain.borrow_mut().last_mut() {
            op.message = Some(text.into());
        }
        self
    }

    /// Append a pipe-joined rule string (`"required|min_len,5"`).
    ///
    /// Unknown rule names are a usage error.
    pub fn raw(&self, rules: &str) -> Result<&Self, ValidateError> {
        for check in parse_checks(rules)? {
            self.push(check);
        }
        Ok(self)
    }

    /// Read the accumulated operations.
    pub fn ops(&self) -> Vec<Op> {
        self.chain.borrow().clone()
    }

    // -- catalog ---------------------------------------------------------

    /// Value must be present and non-blank.
    pub fn required(&self) -> &Self {
        self.push(Check::Required)
    }

    /// Value must equal one of `allowed`.
    pub fn contains<I, S>(&self, allowed: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Check::Contains {
            allowed: allowed.into_iter().map(Into::into).collect(),
        })
    }

    /// Value must be at least `min` characters.
    pub fn min_len(&self, min: usize) -> &Self {
        self.push(Check::MinLen { min })
    }

    /// Value must be at most `max` characters.
    pub fn max_len(&self, max: usize) -> &Self {
        self.push(Check::MaxLen { max })
    }

    /// Value must be exactly `len` characters.
    pub fn exact_len(&self, len: usize) -> &Self {
        self.push(Check::ExactLen { len })
    }

    /// Value length must fall within `min..=max`.
    pub fn between_len(&self, min: usize, max: usize) -> &Self {
        self.push(Check::BetweenLen { min, max })
    }

    /// Letters only.
    pub fn alpha(&self) -> &Self {
        self.push(Check::Alpha)
    }

    /// Letters and digits only.
    pub fn alpha_numeric(&self) -> &Self {
        self.push(Check::AlphaNumeric)
    }

    /// Letters, digits, dashes and underscores.
    pub fn alpha_dash(&self) -> &Self {
        self.push(Check::AlphaDash)
    }

    /// Letters and spaces only.
    pub fn alpha_space(&self) -> &Self {
        self.push(Check::AlphaSpace)
    }

    /// Parses as a number.
    pub fn numeric(&self) -> &Self {
        self.push(Check::Numeric)
    }

    /// Parses as a whole number.
    pub fn integer(&self) -> &Self {
        self.push(Check::Integer)
    }

    /// A boolean-ish token.
    pub fn boolean(&self) -> &Self {
        self.push(Check::Boolean)
    }

    /// A syntactically valid email address.
    pub fn valid_email(&self) -> &Self {
        self.push(Check::ValidEmail)
    }

    /// A syntactically valid URL.
    pub fn valid_url(&self) -> &Self {
        self.push(Check::ValidUrl)
    }

    /// Numeric value must be at least `min`.
    pub fn min_numeric(&self, min: f64) -> &Self {
        self.push(Check::MinNumeric { min })
    }

    /// Numeric value must be at most `max`.
    pub fn max_numeric(&self, max: f64) -> &Self {
        self.push(Check::MaxNumeric { max })
    }

    /// Value must start with `prefix`.
    pub fn starts(&self, prefix: impl Into<String>) -> &Self {
        self.push(Check::Starts {
            prefix: prefix.into(),
        })
    }

    /// Value must end with `suffix`.
    pub fn ends(&self, suffix: impl Into<String>) -> &Self {
        self.push(Check::Ends {
            suffix: suffix.into(),
        })
    }

    /// Value must match `pattern`.
    pub fn regex(&self, pattern: impl Into<String>) -> &Self {
        self.push(Check::Regex {
            pattern: pattern.into(),
        })
    }
}

/// A filter chain under construction.
///
/// Transforms apply left to right at execution time.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    chain: Rc<RefCell<Vec<Transform>>>,
}

impl Filter {
    /// A fresh, empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new handle over the same chain.
    pub(crate) fn share(&self) -> Self {
        Self {
            chain: Rc::clone(&self.chain),
        }
    }

    fn push(&self, transform: Transform) -> &Self {
        self.chain.borrow_mut().push(transform);
        self
    }

    /// Append a pipe-joined filter string (`"trim|lower_case"`).
    pub fn raw(&self, filters: &str) -> Result<&Self, ValidateError> {
        for transform in parse_transforms(filters)? {
            self.push(transform);
        }
        Ok(self)
    }

    /// Read the accumulated transforms.
    pub fn ops(&self) -> Vec<Transform> {
        self.chain.borrow().clone()
    }

    // -- catalog ---------------------------------------------------------

    /// Strip leading and trailing whitespace.
    pub fn trim(&self) -> &Self {
        self.push(Transform::Trim)
    }

    /// Strip leading whitespace.
    pub fn ltrim(&self) -> &Self {
        self.push(Transform::LTrim)
    }

    /// Strip trailing whitespace.
    pub fn rtrim(&self) -> &Self {
        self.push(Transform::RTrim)
    }

    /// Uppercase the whole value.
    pub fn upper_case(&self) -> &Self {
        self.push(Transform::UpperCase)
    }

    /// Lowercase the whole value.
    pub fn lower_case(&self) -> &Self {
        self.push(Transform::LowerCase)
    }

    /// Uppercase the first character.
    pub fn capitalize(&self) -> &Self {
        self.push(Transform::Capitalize)
    }

    /// Lowercased, dash-separated URL slug.
    pub fn slug(&self) -> &Self {
        self.push(Transform::Slug)
    }

    /// Remove all whitespace.
    pub fn strip_space(&self) -> &Self {
        self.push(Transform::StripSpace)
    }

    /// Keep only the digits.
    pub fn whole_number(&self) -> &Self {
        self.push(Transform::WholeNumber)
    }
}
