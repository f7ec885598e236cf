//! Built-in rules
//!
//! Ready-to-use leaf rules for common form and payload checks. Each rule
//! has a default message; override it with
//! [`RuleExt::with_message`](crate::foundation::RuleExt::with_message).
//!
//! # Categories
//!
//! - **Presence**: [`required`]
//! - **Length**: [`min_length`], [`max_length`] (strings),
//!   [`array_min_len`], [`array_max_len`] (arrays)
//! - **Numeric**: [`min`], [`max`]
//! - **Format**: [`matches`], [`email`]
//! - **Membership**: [`one_of`]
//! - **Cross-property**: [`equal_to_property`]
//!
//! # Total evaluation
//!
//! Every rule fails (never panics) on a value of the wrong JSON type, with
//! a message naming the type it received. Length bounds are signed so that
//! a negative bound is a reportable misconfiguration instead of an
//! unrepresentable one: such a rule always fails and reports a diagnostic.

pub mod equality;
pub mod length;
pub mod membership;
pub mod pattern;
pub mod range;
pub mod required;

pub use equality::{EqualToProperty, equal_to_property};
pub use length::{ArrayMaxLen, ArrayMinLen, MaxLength, MinLength, array_max_len, array_min_len, max_length, min_length};
pub use membership::{OneOf, one_of};
pub use pattern::{Email, Matches, email, matches};
pub use range::{Max, Min, max, min};
pub use required::{Required, required};

use serde_json::Value;

use crate::foundation::{Outcome, RuleContext, type_name};

/// Failing outcome for a value of the wrong type.
pub(crate) fn type_mismatch(expected: &str, value: &Value) -> Outcome {
    Outcome::fail(format!(
        "Expected {expected} but received {}.",
        type_name(value)
    ))
}

/// Converts a signed length bound, reporting negative bounds as misconfiguration.
pub(crate) fn length_bound(ctx: &RuleContext<'_>, rule: &str, bound: i64) -> Option<usize> {
    match usize::try_from(bound) {
        Ok(bound) => Some(bound),
        Err(_) => {
            ctx.misconfigured(rule, format!("length bound must not be negative, got {bound}"));
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use serde_json::{Value, json};

    use crate::foundation::{CollectingSink, Diagnostic, Outcome, Rule, RuleContext};

    /// Evaluates `rule` on `value` as property `field` of `root`.
    pub(crate) fn eval_in<R: Rule>(rule: &R, root: &Value, value: &Value) -> (Outcome, Vec<Diagnostic>) {
        let sink = CollectingSink::new();
        let ctx = RuleContext::new("field", root, root, &sink);
        let outcome = rule.evaluate(value, &ctx);
        (outcome, sink.take())
    }

    /// Evaluates `rule` on `value` with an empty root.
    pub(crate) fn eval<R: Rule>(rule: &R, value: Value) -> Outcome {
        eval_in(rule, &json!({}), &value).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::CollectingSink;
    use serde_json::json;

    #[test]
    fn type_mismatch_names_received_type() {
        let outcome = type_mismatch("a string", &json!(12));
        assert!(!outcome.is_valid);
        assert_eq!(outcome.error_message, "Expected a string but received number.");
    }

    #[test]
    fn negative_bound_is_reported() {
        let root = json!({});
        let sink = CollectingSink::new();
        let ctx = RuleContext::new("tags", &root, &root, &sink);

        assert_eq!(length_bound(&ctx, "array_max_len", 3), Some(3));
        assert!(sink.is_empty());

        assert_eq!(length_bound(&ctx, "array_max_len", -1), None);
        let reported = sink.take();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].detail, "length bound must not be negative, got -1");
    }
}
