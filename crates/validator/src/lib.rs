//! # fieldcheck-validator
//!
//! A declarative validation engine for forms, JSON payloads and typed records.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let rules = RuleSet::new()
//!     .rule("email", required())
//!     .rule("email", email())
//!     .rule("password", min_length(8))
//!     .rule("confirmPassword", equal_to_property("password"));
//!
//! let form = json!({"email": "nope", "password": "hunter22", "confirmPassword": "hunter2"});
//! let report = validate_object(&form, &rules);
//! assert_eq!(report.errors_for("email"), ["'nope' is not a valid email address."]);
//! ```
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for leaf rules, [`from_fn`](combinators::from_fn)
//! for one-off closures, [`Predicate`](foundation::Predicate) for a boolean
//! check with a static message, or implement [`Rule`](foundation::Rule)
//! manually for anything else.
//!
//! ## Built-in Rules
//!
//! - **Presence**: [`Required`](rules::Required)
//! - **Length**: [`MinLength`](rules::MinLength), [`MaxLength`](rules::MaxLength),
//!   [`ArrayMinLen`](rules::ArrayMinLen), [`ArrayMaxLen`](rules::ArrayMaxLen)
//! - **Numeric**: [`Min`](rules::Min), [`Max`](rules::Max)
//! - **Format**: [`Matches`](rules::Matches), [`Email`](rules::Email)
//! - **Membership**: [`OneOf`](rules::OneOf)
//! - **Cross-property**: [`EqualToProperty`](rules::EqualToProperty)
//!
//! ## Typed records
//!
//! Structs are validated through [`Fields`](foundation::Fields), a table of
//! named getters bound to a value at validation time; no reflection is
//! involved.

pub mod combinators;
pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;

/// JSON value every rule evaluates. Re-exported for [`rule!`] expansions.
pub use serde_json::Value;

pub use engine::{Engine, validate_collection, validate_field, validate_object};
