//! Rule combinators
//!
//! Wrappers that change how another rule behaves without touching it:
//!
//! - [`WithMessage`] replaces the failure message
//! - [`Optional`] lets absent (`null`) values through
//! - [`FnRule`] turns a closure into a rule

pub mod from_fn;
pub mod message;
pub mod optional;

pub use from_fn::{FnRule, from_fn};
pub use message::{WithMessage, with_message};
pub use optional::{Optional, optional};
