//! Predicate rules: a boolean check plus a static failure template.
//!
//! This is the second way of declaring a check. Instead of building an
//! [`Outcome`] itself, a predicate only answers yes/no and the failure text
//! comes from a template fixed at construction. [`Predicate`] implements
//! [`Rule`], so the engine treats both kinds identically.
//!
//! Unlike leaf rules, which degrade to a failing outcome when misconfigured,
//! a predicate without a message is rejected at construction time.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::foundation::{ConfigError, Outcome, Rule, RuleContext};

type PredicateFn = Box<dyn Fn(&Value, &RuleContext<'_>) -> bool + Send + Sync>;

/// A named boolean check with a static failure template.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::foundation::Predicate;
///
/// let even = Predicate::new("even", ":value is not even.", |value, _ctx| {
///     value.as_i64().is_some_and(|n| n % 2 == 0)
/// })?;
/// ```
pub struct Predicate {
    description: Cow<'static, str>,
    message: Cow<'static, str>,
    predicate: PredicateFn,
}

impl Predicate {
    /// Creates a predicate rule.
    ///
    /// Fails with [`ConfigError::MissingMessage`] when `message` is blank.
    pub fn new<F>(
        description: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        predicate: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&Value, &RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        let description = description.into();
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ConfigError::MissingMessage { description });
        }
        Ok(Self {
            description,
            message,
            predicate: Box::new(predicate),
        })
    }

    /// What the predicate checks.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The failure template.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Rule for Predicate {
    fn evaluate(&self, value: &Value, ctx: &RuleContext<'_>) -> Outcome {
        if (self.predicate)(value, ctx) {
            Outcome::pass()
        } else {
            Outcome::fail(self.message.as_ref())
        }
    }

    fn name(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("description", &self.description)
            .field("message", &self.message)
            .field("predicate", &"<function>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::CollectingSink;
    use serde_json::json;

    fn even() -> Predicate {
        Predicate::new("even", ":value is not even.", |value: &Value, _ctx: &RuleContext<'_>| {
            value.as_i64().is_some_and(|n| n % 2 == 0)
        })
        .unwrap()
    }

    #[test]
    fn passes_with_empty_message() {
        let root = json!({});
        let sink = CollectingSink::new();
        let ctx = RuleContext::new("n", &root, &root, &sink);

        assert_eq!(even().evaluate(&json!(4), &ctx), Outcome::pass());
    }

    #[test]
    fn fails_with_raw_template() {
        let root = json!({});
        let sink = CollectingSink::new();
        let ctx = RuleContext::new("n", &root, &root, &sink);

        let outcome = even().evaluate(&json!(3), &ctx);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.error_message, ":value is not even.");
    }

    #[test]
    fn blank_message_is_rejected() {
        let result = Predicate::new("anything", " ", |_: &Value, _: &RuleContext<'_>| true);
        assert!(matches!(
            result,
            Err(ConfigError::MissingMessage { ref description }) if description == "anything"
        ));
    }

    #[test]
    fn predicate_sees_root() {
        let rule = Predicate::new(
            "below limit",
            "Over the limit.",
            |value: &Value, ctx: &RuleContext<'_>| {
                let limit = ctx.root_property("limit").as_i64().unwrap_or(0);
                value.as_i64().is_some_and(|n| n <= limit)
            },
        )
        .unwrap();

        let root = json!({"limit": 5, "qty": 7});
        let sink = CollectingSink::new();
        let ctx = RuleContext::new("qty", &root, &root, &sink);

        assert!(!rule.evaluate(&json!(7), &ctx).is_valid);
        assert!(rule.evaluate(&json!(5), &ctx).is_valid);
        assert_eq!(rule.name(), "below limit");
        assert_eq!(rule.description(), "below limit");
        assert_eq!(rule.message(), "Over the limit.");
    }
}
