//! Per-field error-message override collectors.

use indexmap::IndexMap;

/// Collects field-to-message overrides.
///
/// The validator flattens every collected pool (later pools win per
/// field) into the engine right before an error map is read.
#[derive(Debug, Clone, Default)]
pub struct MessagePool {
    messages: IndexMap<String, String>,
}

impl MessagePool {
    /// An empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the override message for a field.
    pub fn field(&mut self, name: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.messages.insert(name.into(), message.into());
        self
    }

    /// The collected overrides, in insertion order.
    pub fn messages(&self) -> &IndexMap<String, String> {
        &self.messages
    }
}
