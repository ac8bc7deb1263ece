//! Rule pools: ordered field-name to chain mappings.
//!
//! Pools are where declaration styles converge. However a chain was
//! declared (a direct `field` call, a builder over a transient pool, a
//! multi-name call), it ends up as a pool entry, and `ruleset()` is the
//! single projection the engine consumes.

use crate::entry::{Filter, Valid};
use crate::fields::FieldNames;
use formval_engine::{FilterSet, Ruleset};
use indexmap::IndexMap;

/// Ordered mapping from field name to validation chain.
#[derive(Debug, Clone, Default)]
pub struct ValidPool {
    entries: IndexMap<String, Valid>,
    only: Option<Vec<String>>,
    except: Option<Vec<String>>,
}

impl ValidPool {
    /// An empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the chain for the given field name(s).
    ///
    /// A single name returns the existing entry if the field was declared
    /// before, so repeated declarations accumulate onto one chain. The
    /// multi-name form creates one fresh chain and binds it under every
    /// name (replacing prior bindings): appending through the returned
    /// handle affects all of them identically.
    pub fn rule(&mut self, fields: impl FieldNames) -> Valid {
        let names = fields.field_names();

        if let [name] = names.as_slice() {
            return self
                .entries
                .entry(name.clone())
                .or_default()
                .share();
        }

        let entry = Valid::new();
        for name in names {
            self.entries.insert(name, entry.share());
        }
        entry
    }

    /// Merge every entry of `other` into this pool. On a field-name
    /// collision the incoming entry replaces the existing one.
    pub fn combine(&mut self, other: ValidPool) -> &mut Self {
        tracing::debug!(incoming = other.entries.len(), "combining validation pool");
        for (name, entry) in other.entries {
            self.entries.insert(name, entry);
        }
        self
    }

    /// Restrict execution to the given fields. Clears any `except` set.
    pub fn only(&mut self, fields: impl FieldNames) -> &mut Self {
        self.only = Some(fields.field_names());
        self.except = None;
        self
    }

    /// Exclude the given fields from execution. Clears any `only` set.
    pub fn except(&mut self, fields: impl FieldNames) -> &mut Self {
        self.except = Some(fields.field_names());
        self.only = None;
        self
    }

    /// The canonical projection handed to the engine: each entry
    /// flattened to its operation list, with the subset filter applied.
    /// Stored entries are never mutated by this read.
    pub fn ruleset(&self) -> Ruleset {
        self.entries
            .iter()
            .filter(|(name, _)| self.admits(name))
            .map(|(name, entry)| (name.clone(), entry.ops()))
            .collect()
    }

    fn admits(&self, name: &str) -> bool {
        if let Some(only) = &self.only {
            return only.iter().any(|allowed| allowed == name);
        }
        if let Some(except) = &self.except {
            return !except.iter().any(|excluded| excluded == name);
        }
        true
    }

    /// Number of declared entries, ignoring the subset filter.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered mapping from field name to filter chain.
#[derive(Debug, Clone, Default)]
pub struct FilterPool {
    entries: IndexMap<String, Filter>,
}

impl FilterPool {
    /// An empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the chain for the given field name(s).
    ///
    /// Same semantics as [`ValidPool::rule`].
    pub fn rule(&mut self, fields: impl FieldNames) -> Filter {
        let names = fields.field_names();

        if let [name] = names.as_slice() {
            return self
                .entries
                .entry(name.clone())
                .or_default()
                .share();
        }

        let entry = Filter::new();
        for name in names {
            self.entries.insert(name, entry.share());
        }
        entry
    }

    /// Merge every entry of `other` into this pool; incoming entries
    /// replace existing ones.
    pub fn combine(&mut self, other: FilterPool) -> &mut Self {
        tracing::debug!(incoming = other.entries.len(), "combining filter pool");
        for (name, entry) in other.entries {
            self.entries.insert(name, entry);
        }
        self
    }

    /// The projection handed to the engine.
    pub fn ruleset(&self) -> FilterSet {
        self.entries
            .iter()
            .map(|(name, entry)| (name.clone(), entry.ops()))
            .collect()
    }

    /// Number of declared entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formval_engine::{Check, Transform};

    #[test]
    fn rule_get_or_create_accumulates() {
        let mut pool = ValidPool::new();
        pool.rule("test").required();
        pool.rule("test").min_len(5);

        let ruleset = pool.ruleset();
        assert_eq!(ruleset["test"].len(), 2);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn multi_name_shares_one_chain() {
        let mut pool = ValidPool::new();
        let entry = pool.rule(["a", "b"]);
        entry.required();
        entry.min_len(3);

        let ruleset = pool.ruleset();
        assert_eq!(ruleset["a"], ruleset["b"]);
        assert_eq!(ruleset["a"].len(), 2);
    }

    #[test]
    fn multi_name_replaces_prior_bindings() {
        let mut pool = ValidPool::new();
        pool.rule("a").required();
        pool.rule(["a", "b"]).numeric();

        let ruleset = pool.ruleset();
        assert_eq!(ruleset["a"].len(), 1);
        assert_eq!(ruleset["a"][0].check, Check::Numeric);
    }

    #[test]
    fn combine_incoming_wins() {
        let mut base = ValidPool::new();
        base.rule("a").required();
        base.rule("b").required();

        let mut incoming = ValidPool::new();
        incoming.rule("b").numeric();
        incoming.rule("c").alpha();

        base.combine(incoming);
        let ruleset = base.ruleset();
        assert_eq!(ruleset.len(), 3);
        assert_eq!(ruleset["b"][0].check, Check::Numeric);
        // first-insertion order is kept for collided fields
        assert_eq!(
            ruleset.keys().collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn only_filters_projection_without_deleting() {
        let mut pool = ValidPool::new();
        pool.rule("a").required();
        pool.rule("b").required();

        pool.only(["a"]);
        assert_eq!(pool.ruleset().len(), 1);
        assert!(pool.ruleset().contains_key("a"));
        // entries survive; a later except() sees them all
        pool.except(["a"]);
        assert_eq!(pool.ruleset().len(), 1);
        assert!(pool.ruleset().contains_key("b"));
    }

    #[test]
    fn only_and_except_are_mutually_exclusive() {
        let mut pool = ValidPool::new();
        pool.rule("a").required();
        pool.rule("b").required();

        pool.except(["a"]);
        pool.only(["a", "b"]);
        assert_eq!(pool.ruleset().len(), 2);
    }

    #[test]
    fn filter_pool_projection() {
        let mut pool = FilterPool::new();
        pool.rule(["test", "test2"]).trim();

        let set = pool.ruleset();
        assert_eq!(set["test"], vec![Transform::Trim]);
        assert_eq!(set["test2"], vec![Transform::Trim]);
    }
}
