//! Cross-property equality rule

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Outcome, Rule, RuleContext};

/// Validates that the value equals another property of the root object.
///
/// The compared property is read from [`RuleContext::root`], so the rule
/// works the same whether the property lives on the root itself or on an
/// element validated against an explicit root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualToProperty {
    other: Cow<'static, str>,
}

impl EqualToProperty {
    /// Compares against the property named `other`.
    pub fn new(other: impl Into<Cow<'static, str>>) -> Self {
        Self {
            other: other.into(),
        }
    }

    /// Name of the compared property.
    pub fn other(&self) -> &str {
        &self.other
    }
}

impl Rule for EqualToProperty {
    fn evaluate(&self, value: &Value, ctx: &RuleContext<'_>) -> Outcome {
        let message = || format!("This field must match '{}'.", self.other);

        if self.other.is_empty() {
            ctx.misconfigured("equal_to_property", "compared property name is empty");
            return Outcome::fail(message());
        }
        Outcome::check(*value == ctx.root_property(&self.other), message)
    }

    fn name(&self) -> &str {
        "equal_to_property"
    }
}

/// Creates a rule comparing against the root property `other`.
pub fn equal_to_property(other: impl Into<Cow<'static, str>>) -> EqualToProperty {
    EqualToProperty::new(other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::eval_in;
    use serde_json::json;

    #[test]
    fn mismatch_fails() {
        let root = json!({"password": "a", "confirmPassword": "b"});
        let (outcome, _) = eval_in(&equal_to_property("password"), &root, &root["confirmPassword"]);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.error_message, "This field must match 'password'.");
    }

    #[test]
    fn match_passes() {
        let root = json!({"password": "a", "confirmPassword": "a"});
        let (outcome, _) = eval_in(&equal_to_property("password"), &root, &root["confirmPassword"]);
        assert_eq!(outcome, Outcome::pass());
    }

    #[test]
    fn missing_compared_property_reads_as_null() {
        let root = json!({"confirm": "a"});
        let (outcome, _) = eval_in(&equal_to_property("password"), &root, &json!("a"));
        assert!(!outcome.is_valid);
    }

    #[test]
    fn empty_name_is_misconfiguration() {
        let root = json!({});
        let (outcome, diagnostics) = eval_in(&equal_to_property(""), &root, &json!(null));
        assert!(!outcome.is_valid);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(equal_to_property("x").other(), "x");
    }
}
