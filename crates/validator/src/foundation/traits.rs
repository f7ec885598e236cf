//! Core traits for the validation system
//!
//! Every leaf rule, combinator and predicate implements [`Rule`]. The engine
//! only ever talks to this trait, so both ways of declaring a check (a rule
//! that builds its own [`Outcome`], or a [`Predicate`](crate::foundation::Predicate)
//! with a static template) are indistinguishable to callers.

use std::borrow::Cow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::combinators::{Optional, WithMessage};
use crate::foundation::RuleContext;

// ============================================================================
// OUTCOME
// ============================================================================

/// Message used when a rule fails without saying why.
pub(crate) const FALLBACK_MESSAGE: &str = "This field is invalid.";

/// Result of evaluating one rule against one value.
///
/// A passing outcome always carries an empty message and a failing one a
/// non-empty message; the constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Whether the value satisfied the rule.
    pub is_valid: bool,
    /// Failure text, possibly containing the `:value` placeholder.
    pub error_message: String,
}

impl Outcome {
    /// A passing outcome.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
        }
    }

    /// A failing outcome with the given message.
    ///
    /// A blank message is replaced by a generic one.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        let mut error_message = message.into();
        if error_message.trim().is_empty() {
            error_message = FALLBACK_MESSAGE.to_owned();
        }
        Self {
            is_valid: false,
            error_message,
        }
    }

    /// Passes when `condition` holds, otherwise fails with the lazily built message.
    #[must_use]
    pub fn check(condition: bool, message: impl FnOnce() -> String) -> Self {
        if condition {
            Self::pass()
        } else {
            Self::fail(message())
        }
    }
}

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A reusable check bound to its configuration.
///
/// Rules must be pure: the same value and context always produce the same
/// outcome. The only permitted side effect is reporting misconfiguration
/// through [`RuleContext::misconfigured`], after which the rule fails
/// instead of panicking.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::foundation::{Outcome, Rule, RuleContext};
/// use serde_json::Value;
///
/// struct Even;
///
/// impl Rule for Even {
///     fn evaluate(&self, value: &Value, _ctx: &RuleContext<'_>) -> Outcome {
///         match value.as_i64() {
///             Some(n) => Outcome::check(n % 2 == 0, || ":value is odd.".into()),
///             None => Outcome::fail("Expected an integer."),
///         }
///     }
///
///     fn name(&self) -> &str {
///         "even"
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Evaluates the rule against a property value.
    ///
    /// `ctx` exposes the root object under validation (for rules comparing
    /// against sibling properties) and the diagnostics sink.
    fn evaluate(&self, value: &Value, ctx: &RuleContext<'_>) -> Outcome;

    /// Short identifier used in logs and diagnostics.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn evaluate(&self, value: &Value, ctx: &RuleContext<'_>) -> Outcome {
        (**self).evaluate(value, ctx)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn evaluate(&self, value: &Value, ctx: &RuleContext<'_>) -> Outcome {
        (**self).evaluate(value, ctx)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn evaluate(&self, value: &Value, ctx: &RuleContext<'_>) -> Outcome {
        (**self).evaluate(value, ctx)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Shared, type-erased rule as stored in a [`RuleSet`](crate::engine::RuleSet).
pub type BoxedRule = Arc<dyn Rule>;

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every [`Rule`].
pub trait RuleExt: Rule + Sized {
    /// Replaces the failure message of this rule.
    ///
    /// The replacement may contain the `:value` placeholder.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let rule = max_length(3).with_message("':value' is too long");
    /// ```
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Skips this rule when the value is absent or `null`.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Erases the rule type for storage next to rules of other types.
    fn boxed(self) -> BoxedRule
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<R: Rule> RuleExt for R {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::CollectingSink;
    use serde_json::json;

    struct AlwaysValid;

    impl Rule for AlwaysValid {
        fn evaluate(&self, _value: &Value, _ctx: &RuleContext<'_>) -> Outcome {
            Outcome::pass()
        }
    }

    #[test]
    fn pass_has_empty_message() {
        let outcome = Outcome::pass();
        assert!(outcome.is_valid);
        assert!(outcome.error_message.is_empty());
    }

    #[test]
    fn blank_failure_gets_fallback_message() {
        let outcome = Outcome::fail("  ");
        assert!(!outcome.is_valid);
        assert_eq!(outcome.error_message, FALLBACK_MESSAGE);
    }

    #[test]
    fn check_builds_message_only_on_failure() {
        let outcome = Outcome::check(true, || unreachable!());
        assert!(outcome.is_valid);

        let outcome = Outcome::check(false, || "nope".to_owned());
        assert_eq!(outcome.error_message, "nope");
    }

    #[test]
    fn default_name_and_smart_pointer_impls() {
        let root = json!({});
        let sink = CollectingSink::new();
        let ctx = RuleContext::new("field", &root, &root, &sink);

        let boxed: Box<dyn Rule> = Box::new(AlwaysValid);
        let shared = AlwaysValid.boxed();

        assert_eq!(boxed.name(), "custom");
        assert!(boxed.evaluate(&json!(1), &ctx).is_valid);
        assert!(shared.evaluate(&json!(1), &ctx).is_valid);
        let by_ref: &dyn Rule = &&AlwaysValid;
        assert!(by_ref.evaluate(&json!(1), &ctx).is_valid);
    }
}
