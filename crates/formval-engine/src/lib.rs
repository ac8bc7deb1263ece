//! # formval-engine
//!
//! The rule engine behind `formval`. Executes per-field operation chains
//! against a named-field input map and reports structured failures, or
//! applies sanitization chains and returns the transformed map.
//!
//! The engine knows nothing about how chains are declared; the fluent
//! layer lives in the `formval` crate. What it owns:
//!
//! - the operation catalogs ([`Check`] predicates and [`Transform`]s),
//!   including the legacy pipe-joined string notation
//! - the execution primitive ([`Engine::validate`] / [`Engine::filter`])
//! - message rendering: locale templates, parameter interpolation,
//!   per-operation and per-field overrides
//!
//! ## Example
//!
//! ```rust
//! use formval_engine::{Check, Engine, Op};
//! use indexmap::indexmap;
//!
//! let engine = Engine::new();
//! let input = indexmap! { "test".to_string() => "test".to_string() };
//! let ruleset = indexmap! {
//!     "test".to_string() => vec![Op::new(Check::Required), Op::new(Check::MinLen { min: 5 })],
//! };
//!
//! let errors = engine.validate(&input, &ruleset);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].code, "min_len");
//! ```

mod check;
mod engine;
mod error;
pub mod messages;
mod op;
mod report;
mod transform;

pub use engine::{Engine, FilterSet, InputMap, Ruleset};
pub use error::EngineError;
pub use op::{parse_checks, parse_transforms, Check, Op, Transform};
pub use report::FieldError;

/// Prelude module for the engine surface.
pub mod prelude {
    pub use crate::engine::{Engine, FilterSet, InputMap, Ruleset};
    pub use crate::error::EngineError;
    pub use crate::op::{parse_checks, parse_transforms, Check, Op, Transform};
    pub use crate::report::FieldError;
}
