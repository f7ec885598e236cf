//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Rule`], [`RuleExt`], [`PropertySource`], [`DiagnosticSink`]
//! - **Results**: [`Outcome`]
//! - **Context**: [`RuleContext`]
//! - **Adapters**: [`Predicate`] (boolean check + static template), [`Fields`]
//!   (typed getters for structs)
//! - **Errors**: [`ConfigError`]
//!
//! # Architecture
//!
//! ## 1. One rule interface
//!
//! Everything the engine evaluates is a [`Rule`]. A rule receives the
//! property value and a [`RuleContext`] and returns an [`Outcome`]:
//!
//! ```rust,ignore
//! use fieldcheck_validator::foundation::{Outcome, Rule, RuleContext};
//!
//! struct NotZero;
//!
//! impl Rule for NotZero {
//!     fn evaluate(&self, value: &Value, _ctx: &RuleContext<'_>) -> Outcome {
//!         Outcome::check(value.as_f64() != Some(0.0), || "Must not be zero.".into())
//!     }
//! }
//! ```
//!
//! ## 2. Total evaluation
//!
//! Rules never panic on bad input. A value of the wrong type is a failed
//! outcome naming the received type; a broken configuration is a failed
//! outcome plus a diagnostic.
//!
//! ## 3. Templated messages
//!
//! Failure messages may contain `:value`, which the engine replaces with
//! the offending value when it builds the report.

pub mod context;
pub mod diagnostics;
pub mod error;
pub mod predicate;
pub mod property;
pub mod traits;
pub mod value;

pub use context::RuleContext;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use error::ConfigError;
pub use predicate::Predicate;
pub use property::{Fields, PropertySource, Record};
pub use traits::{BoxedRule, Outcome, Rule, RuleExt};
pub use value::{display_value, is_blank, type_name};

// ============================================================================
// PRELUDE
// ============================================================================

/// Common imports for working with the validation foundation.
pub mod prelude {
    pub use super::{
        BoxedRule, CollectingSink, ConfigError, Diagnostic, DiagnosticSink, Fields, Outcome,
        Predicate, PropertySource, Record, Rule, RuleContext, RuleExt, TracingSink,
    };
}
