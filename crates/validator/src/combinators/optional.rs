//! OPTIONAL combinator - skips rules for absent values

use serde_json::Value;

use crate::foundation::{Outcome, Rule, RuleContext};

/// Makes a rule pass when the value is absent or `null`.
///
/// Present values are handed to the inner rule unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<R> {
    pub(crate) inner: R,
}

impl<R> Optional<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Rule> Rule for Optional<R> {
    fn evaluate(&self, value: &Value, ctx: &RuleContext<'_>) -> Outcome {
        match value {
            Value::Null => Outcome::pass(),
            present => self.inner.evaluate(present, ctx),
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Creates an `Optional` combinator.
pub fn optional<R>(rule: R) -> Optional<R> {
    Optional::new(rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::CollectingSink;
    use crate::rules::{email, min_length};
    use serde_json::json;

    fn check<R: Rule>(rule: &R, value: Value) -> Outcome {
        let root = json!({});
        let sink = CollectingSink::new();
        let ctx = RuleContext::new("field", &root, &root, &sink);
        rule.evaluate(&value, &ctx)
    }

    #[test]
    fn null_passes() {
        assert!(check(&optional(min_length(3)), Value::Null).is_valid);
    }

    #[test]
    fn present_value_is_checked() {
        assert!(check(&optional(min_length(3)), json!("abcd")).is_valid);
        assert!(!check(&optional(min_length(3)), json!("ab")).is_valid);
    }

    #[test]
    fn empty_string_is_still_checked() {
        assert!(!check(&optional(email()), json!("")).is_valid);
    }

    #[test]
    fn accessors() {
        let rule = optional(min_length(3));
        assert_eq!(rule.name(), "min_length");
        assert_eq!(rule.inner().min, 3);
        assert_eq!(rule.into_inner().min, 3);
    }
}
