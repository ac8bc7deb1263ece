//! The execution primitive: runs per-field operation chains against an
//! input map.

use crate::messages;
use crate::op::{Check, Op, Transform};
use crate::report::FieldError;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Ordered field-name to value input map.
pub type InputMap = IndexMap<String, String>;

/// Ordered field-name to validation-chain map.
pub type Ruleset = IndexMap<String, Vec<Op>>;

/// Ordered field-name to filter-chain map.
pub type FilterSet = IndexMap<String, Vec<Transform>>;

/// Executes validation and filter chains.
///
/// The engine is deliberately stateless about rules and input; it only
/// carries presentation state: the locale used for message templates and
/// any per-field message overrides. Both affect how failures are
/// rendered, not whether they occur.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    locale: Option<String>,
    field_messages: HashMap<String, String>,
}

impl Engine {
    /// Create an engine with the default locale and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale used for message templates.
    ///
    /// Takes effect for subsequent `validate` calls; messages of already
    /// produced errors are not re-rendered.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Some(locale.into());
    }

    /// Replace the per-field message overrides.
    ///
    /// An override wins over whatever message an error for that field was
    /// rendered with.
    pub fn set_field_messages(&mut self, messages: IndexMap<String, String>) {
        self.field_messages = messages.into_iter().collect();
    }

    fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(messages::DEFAULT_LOCALE)
    }

    /// Run validation chains against the input.
    ///
    /// Returns every failed operation in ruleset order; an empty list
    /// means the input passed. A missing or blank-only field fails only
    /// `required` (negation included); all other checks are skipped for
    /// absent values.
    pub fn validate(&self, input: &InputMap, ruleset: &Ruleset) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for (field, chain) in ruleset {
            let value = input.get(field);
            for op in chain {
                let passed = match value {
                    Some(value) => op.check.eval(value) != op.negated,
                    // Absent value: only `required` is evaluated.
                    None => match op.check {
                        Check::Required => op.negated,
                        _ => continue,
                    },
                };

                if !passed {
                    errors.push(self.render(field, op));
                }
            }
        }

        tracing::debug!(
            fields = ruleset.len(),
            errors = errors.len(),
            "validation run complete"
        );

        errors
    }

    fn render(&self, field: &str, op: &Op) -> FieldError {
        let message = match &op.message {
            Some(message) => message.clone(),
            None => messages::interpolate(
                messages::template(self.locale(), op.check.name()),
                field,
                &op.check.params(),
            ),
        };

        FieldError::new(field, op.check.name(), message)
    }

    /// Collapse an error list into a field-to-message map.
    ///
    /// The first error per field wins, fields keep their ruleset order,
    /// and per-field message overrides replace the rendered message.
    pub fn errors_map(&self, errors: &[FieldError]) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        for error in errors {
            if map.contains_key(&error.field) {
                continue;
            }
            let message = self
                .field_messages
                .get(&error.field)
                .cloned()
                .unwrap_or_else(|| error.message.clone());
            map.insert(error.field.clone(), message);
        }
        map
    }

    /// Run filter chains against the input.
    ///
    /// Every input field is copied to the output; fields with a chain are
    /// replaced by the chain's left-to-right result. Chains for fields
    /// absent from the input are ignored.
    pub fn filter(&self, input: &InputMap, filters: &FilterSet) -> InputMap {
        let mut output = input.clone();

        for (field, chain) in filters {
            if let Some(value) = output.get_mut(field) {
                for transform in chain {
                    *value = transform.apply(value);
                }
            }
        }

        tracing::debug!(fields = filters.len(), "filter run complete");

        output
    }
}
