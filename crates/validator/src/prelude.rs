//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that
//! brings in the rule traits, the built-in rules, the combinators and the
//! engine.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let rules = RuleSet::new()
//!     .rule("username", required())
//!     .rule("username", min_length(3).with_message("Too short: ':value'"))
//!     .rule("nickname", max_length(20).optional());
//! ```

// ============================================================================
// FOUNDATION: Core traits, results, context
// ============================================================================

pub use crate::foundation::{
    BoxedRule, CollectingSink, ConfigError, Diagnostic, DiagnosticSink, Fields, Outcome,
    Predicate, PropertySource, Record, Rule, RuleContext, RuleExt, TracingSink,
};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;

// ============================================================================
// COMBINATORS: Wrappers and adapters
// ============================================================================

pub use crate::combinators::{FnRule, Optional, WithMessage, from_fn, optional, with_message};

// ============================================================================
// ENGINE: Evaluation and reports
// ============================================================================

pub use crate::engine::{
    CollectionMode, Engine, EngineBuilder, EngineConfig, FieldErrors, IndexedErrors,
    ObjectReport, PropertyValidationResult, RuleSet, validate_collection, validate_field,
    validate_object,
};
