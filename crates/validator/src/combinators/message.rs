//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Outcome, Rule, RuleContext};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the failure message of a rule.
///
/// Useful for providing user-friendly messages. The replacement may use the
/// `:value` placeholder. An empty replacement keeps the inner rule's message.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::prelude::*;
///
/// let rule = WithMessage::new(min_length(8), "Password must be at least 8 characters");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<R> {
    inner: R,
    message: Cow<'static, str>,
}

impl<R> WithMessage<R> {
    /// Creates a new `WithMessage` combinator.
    pub fn new(inner: R, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Rule> Rule for WithMessage<R> {
    fn evaluate(&self, value: &Value, ctx: &RuleContext<'_>) -> Outcome {
        let outcome = self.inner.evaluate(value, ctx);
        if outcome.is_valid || self.message.is_empty() {
            outcome
        } else {
            Outcome::fail(self.message.as_ref())
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<R>(rule: R, message: impl Into<Cow<'static, str>>) -> WithMessage<R> {
    WithMessage::new(rule, message)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::CollectingSink;
    use crate::rules::max_length;
    use serde_json::json;

    fn check<R: Rule>(rule: &R, value: Value) -> Outcome {
        let root = json!({});
        let sink = CollectingSink::new();
        let ctx = RuleContext::new("name", &root, &root, &sink);
        rule.evaluate(&value, &ctx)
    }

    #[test]
    fn success_is_untouched() {
        let rule = WithMessage::new(max_length(5), "Too long");
        assert_eq!(check(&rule, json!("abc")), Outcome::pass());
    }

    #[test]
    fn replaces_message() {
        let rule = WithMessage::new(max_length(2), "Name ':value' is too long");
        let outcome = check(&rule, json!("abcdef"));

        assert!(!outcome.is_valid);
        assert_eq!(outcome.error_message, "Name ':value' is too long");
    }

    #[test]
    fn empty_message_keeps_original() {
        let rule = with_message(max_length(2), "");
        let outcome = check(&rule, json!("abcdef"));
        assert_eq!(outcome.error_message, "The maximum length for this field is 2.");
    }

    #[test]
    fn keeps_inner_name() {
        let rule = with_message(max_length(2), "x");
        assert_eq!(rule.name(), "max_length");
        assert_eq!(rule.message(), "x");
        assert_eq!(rule.inner().max, 2);
        assert_eq!(rule.into_inner().max, 2);
    }
}
