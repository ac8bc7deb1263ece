//! The validation facade: input map, rule pools, and every execution
//! entry point.

use crate::condition::ValidationCondition;
use crate::entry::{Filter, Valid};
use crate::error::ValidateError;
use crate::fields::FieldNames;
use crate::message_pool::MessagePool;
use crate::pool::{FilterPool, ValidPool};
use crate::submitted::{CgiSubmission, SubmissionDetector};
use formval_engine::{Engine, FieldError, InputMap};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Result of [`Validator::failed_or_filter`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", content = "fields", rename_all = "snake_case")]
pub enum FilterOutcome {
    /// Validation passed; here is the filtered input.
    Filtered(IndexMap<String, String>),
    /// Validation failed; nothing was filtered.
    Failed,
}

/// Declares validation and filter rules for named fields and runs them
/// against an input map.
///
/// All entry points (`is_valid`, `get_error`, `valid_or_error`, ...) are
/// views over the same execution: one run of the persistent
/// [`ValidPool`] against the input. The run is memoized; attaching new
/// validation rules or mutating the input invalidates the memo, while
/// filter declarations never do.
///
/// ## Example
///
/// ```rust
/// use formval::Validator;
///
/// let mut valid = Validator::new([("test", "test")]);
/// valid.field("test").required().min_len(5);
///
/// assert!(!valid.is_valid());
/// let errors = valid.get_error();
/// assert_eq!(errors.len(), 1);
/// ```
pub struct Validator {
    engine: Engine,
    fields: InputMap,
    valid_pool: ValidPool,
    filter_pool: FilterPool,
    /// Memoized error list of the last persistent run, if still valid.
    report: Option<Vec<FieldError>>,
    messages: Vec<MessagePool>,
    detector: Box<dyn SubmissionDetector>,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            engine: Engine::new(),
            fields: InputMap::new(),
            valid_pool: ValidPool::new(),
            filter_pool: FilterPool::new(),
            report: None,
            messages: Vec::new(),
            detector: Box::new(CgiSubmission),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("validations", &self.valid_pool.len())
            .field("filters", &self.filter_pool.len())
            .field("memoized", &self.report.is_some())
            .finish()
    }
}

impl Validator {
    /// Create a validator over the given input fields.
    pub fn new<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut validator = Self::default();
        validator.fields(fields);
        validator
    }

    /// Create a validator and declare both pools in one call.
    ///
    /// Each builder receives a fresh pool and must return it (possibly a
    /// different one it built itself); the result is combined into the
    /// persistent pool.
    pub fn make<I, K, V>(
        fields: I,
        validations: impl FnOnce(ValidPool) -> ValidPool,
        filters: impl FnOnce(FilterPool) -> FilterPool,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut validator = Self::new(fields);
        validator.validation(validations);
        validator.filters(filters);
        validator
    }

    /// Replace the submission detector.
    pub fn with_detector(mut self, detector: impl SubmissionDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    // -- input -----------------------------------------------------------

    /// Add or overwrite input fields.
    ///
    /// Mutating the input invalidates the memoized validation result.
    pub fn fields<I, K, V>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in fields {
            self.fields.insert(key.into(), value.into());
        }
        self.report = None;
        self
    }

    /// The current input fields.
    pub fn get_fields(&self) -> &InputMap {
        &self.fields
    }

    // -- declaring rules -------------------------------------------------

    /// Get or create the validation chain for the given field name(s).
    ///
    /// Attaching validation rules invalidates the memoized result.
    pub fn field(&mut self, fields: impl FieldNames) -> Valid {
        self.report = None;
        self.valid_pool.rule(fields)
    }

    /// Get or create the filter chain for the given field name(s).
    ///
    /// Filters do not affect validation, so the memoized result stays.
    pub fn filter(&mut self, fields: impl FieldNames) -> Filter {
        self.filter_pool.rule(fields)
    }

    /// Declare validation rules through a builder over a transient pool,
    /// combined into the persistent pool (incoming entries win).
    pub fn validation(&mut self, rules: impl FnOnce(ValidPool) -> ValidPool) -> &mut Self {
        let pool = rules(ValidPool::new());
        self.valid_pool.combine(pool);
        self.report = None;
        self
    }

    /// Declare filter rules through a builder over a transient pool,
    /// combined into the persistent pool (incoming entries win).
    pub fn filters(&mut self, rules: impl FnOnce(FilterPool) -> FilterPool) -> &mut Self {
        let pool = rules(FilterPool::new());
        self.filter_pool.combine(pool);
        self
    }

    // -- execution -------------------------------------------------------

    /// Run the persistent validation, reusing the memoized result when
    /// neither rules nor input changed since the last run.
    fn run_validate(&mut self) -> &[FieldError] {
        if self.report.is_none() {
            let errors = self.engine.validate(&self.fields, &self.valid_pool.ruleset());
            self.report = Some(errors);
        } else {
            tracing::debug!("validation memo hit");
        }
        self.report.as_deref().unwrap_or_default()
    }

    /// True iff the persistent validation passes against the input.
    ///
    /// With no rules attached this is vacuously true.
    pub fn is_valid(&mut self) -> bool {
        self.run_validate().is_empty()
    }

    /// One-shot check of an inline rule set against the input.
    ///
    /// The builder receives a fresh transient pool and must return it.
    /// Persistent pools and the memoized result are untouched.
    pub fn is_valid_where(&self, rules: impl FnOnce(ValidPool) -> ValidPool) -> bool {
        let pool = rules(ValidPool::new());
        self.engine
            .validate(&self.fields, &pool.ruleset())
            .is_empty()
    }

    /// Exact negation of [`is_valid`](Self::is_valid).
    pub fn is_error(&mut self) -> bool {
        !self.is_valid()
    }

    /// Exact negation of [`is_valid_where`](Self::is_valid_where).
    pub fn is_error_where(&self, rules: impl FnOnce(ValidPool) -> ValidPool) -> bool {
        !self.is_valid_where(rules)
    }

    /// Run the persistent validation; invoke `then` on success.
    ///
    /// The returned condition carries the error list for a chained
    /// failure handler:
    ///
    /// ```rust
    /// use formval::Validator;
    ///
    /// let mut valid = Validator::new([("test", "test")]);
    /// valid.field("test").min_len(5);
    ///
    /// valid
    ///     .if_valid(|| unreachable!("input is too short"))
    ///     .otherwise(|errors| assert_eq!(errors.len(), 1));
    /// ```
    pub fn if_valid(&mut self, then: impl FnOnce()) -> ValidationCondition {
        let errors = self.run_validate().to_vec();
        if errors.is_empty() {
            then();
            return ValidationCondition::passed();
        }
        ValidationCondition::fallen(errors)
    }

    /// Run the persistent validation; fail with the default
    /// [`ValidateError::Invalid`] when it does not pass.
    pub fn valid_or_exception(&mut self) -> Result<(), ValidateError> {
        self.valid_or_exception_with(ValidateError::Invalid)
    }

    /// Run the persistent validation; fail with the supplied error when
    /// it does not pass.
    pub fn valid_or_exception_with(&mut self, exception: ValidateError) -> Result<(), ValidateError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(exception)
        }
    }

    /// Run the persistent validation; return the structured error list on
    /// failure.
    pub fn valid_or_error(&mut self) -> Result<(), Vec<FieldError>> {
        let errors = self.run_validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.to_vec())
        }
    }

    /// Field-to-message error map of the persistent validation.
    ///
    /// Memoized per generation: calling twice without attaching rules or
    /// mutating input reuses the previous run. Message overrides
    /// collected via [`messages`](Self::messages) are re-applied on every
    /// read.
    pub fn get_error(&mut self) -> IndexMap<String, String> {
        self.run_validate();
        self.install_messages();
        let errors = self.report.as_deref().unwrap_or_default();
        self.engine.errors_map(errors)
    }

    // -- filtering -------------------------------------------------------

    /// Apply the persistent filter pool to the input and return the
    /// transformed map. Fields without filters pass through unchanged.
    pub fn filter_out(&self) -> InputMap {
        self.engine.filter(&self.fields, &self.filter_pool.ruleset())
    }

    /// Apply an inline filter set with patch semantics: the builder's
    /// transient pool replaces per-field chains entirely, fields it does
    /// not touch pass through with their raw values, and the persistent
    /// filter pool is not consulted.
    pub fn filter_out_where(&self, rules: impl FnOnce(FilterPool) -> FilterPool) -> InputMap {
        let pool = rules(FilterPool::new());
        self.engine.filter(&self.fields, &pool.ruleset())
    }

    /// Run the persistent validation; on success return the filtered
    /// input, on failure report that nothing was filtered.
    pub fn failed_or_filter(&mut self) -> FilterOutcome {
        if self.is_valid() {
            FilterOutcome::Filtered(self.filter_out())
        } else {
            FilterOutcome::Failed
        }
    }

    // -- presentation ----------------------------------------------------

    /// Set the locale for error messages.
    ///
    /// Message lookup happens at engine-run time, so this must be called
    /// before the execution whose messages it should affect.
    pub fn lang(&mut self, locale: impl Into<String>) -> &mut Self {
        self.engine.set_locale(locale);
        self
    }

    /// Allocate a new message-override collector.
    ///
    /// All collected overrides are flattened (later collectors win per
    /// field) and installed into the engine before any error read.
    pub fn messages(&mut self) -> &mut MessagePool {
        self.messages.push(MessagePool::new());
        self.messages.last_mut().expect("pool was just pushed")
    }

    fn install_messages(&mut self) {
        let mut flattened = IndexMap::new();
        for pool in &self.messages {
            for (field, message) in pool.messages() {
                flattened.insert(field.clone(), message.clone());
            }
        }
        self.engine.set_field_messages(flattened);
    }

    // -- field subsetting ------------------------------------------------

    /// Restrict validation to the given fields.
    pub fn only(&mut self, fields: impl FieldNames) -> &mut Self {
        self.valid_pool.only(fields);
        self.report = None;
        self
    }

    /// Exclude the given fields from validation.
    pub fn except(&mut self, fields: impl FieldNames) -> &mut Self {
        self.valid_pool.except(fields);
        self.report = None;
        self
    }

    // -- submission ------------------------------------------------------

    /// True iff the ambient context indicates a submitted form.
    pub fn submitted(&self) -> bool {
        self.detector.detect()
    }

    /// Validation passed and the form was submitted.
    pub fn passed(&mut self) -> bool {
        self.is_valid() && self.submitted()
    }

    /// Negation of [`passed`](Self::passed).
    pub fn fails(&mut self) -> bool {
        !self.passed()
    }
}
