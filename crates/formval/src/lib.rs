//! # formval
//!
//! Fluent field validation and sanitization. Declare rule chains per
//! named field, run them against an input map, and read the outcome as a
//! boolean, a structured error map, or the filtered data.
//!
//! ## Example
//!
//! ```rust
//! use formval::Validator;
//!
//! let mut valid = Validator::new([("username", "bob"), ("email", "bob@example.com")]);
//!
//! valid.field("username").required().between_len(3, 20);
//! valid.field("email").required().valid_email();
//! valid.filter("username").trim();
//!
//! assert!(valid.is_valid());
//! assert_eq!(valid.filter_out()["username"], "bob");
//! ```
//!
//! Rules can also be declared inline for a one-shot check:
//!
//! ```rust
//! use formval::Validator;
//!
//! let valid = Validator::new([("age", "17")]);
//!
//! let ok = valid.is_valid_where(|mut pool| {
//!     pool.rule("age").required().min_numeric(18.0);
//!     pool
//! });
//! assert!(!ok);
//! ```
//!
//! The engine behind the fluent layer lives in `formval-engine`; its
//! operation catalog and error types are re-exported here.

mod condition;
mod entry;
mod error;
mod fields;
mod message_pool;
mod pool;
mod submitted;
mod validator;

pub use condition::ValidationCondition;
pub use entry::{Filter, Valid};
pub use error::ValidateError;
pub use fields::FieldNames;
pub use message_pool::MessagePool;
pub use pool::{FilterPool, ValidPool};
pub use submitted::{CgiSubmission, StaticSubmission, SubmissionDetector};
pub use validator::{FilterOutcome, Validator};

// Engine surface needed to work with results and raw chains.
pub use formval_engine::{Check, EngineError, FieldError, InputMap, Op, Transform};

/// Prelude module for the fluent surface.
pub mod prelude {
    pub use crate::condition::ValidationCondition;
    pub use crate::entry::{Filter, Valid};
    pub use crate::error::ValidateError;
    pub use crate::fields::FieldNames;
    pub use crate::message_pool::MessagePool;
    pub use crate::pool::{FilterPool, ValidPool};
    pub use crate::submitted::{CgiSubmission, StaticSubmission, SubmissionDetector};
    pub use crate::validator::{FilterOutcome, Validator};
    pub use formval_engine::{Check, EngineError, FieldError, InputMap, Op, Transform};
}
