//! Membership rule

use serde_json::Value;

use crate::foundation::{Outcome, Rule, RuleContext};

/// Validates that the value equals one of a fixed list of candidates.
///
/// Comparison is JSON equality, so `1` and `"1"` are different values. An
/// empty candidate list is a misconfiguration: the rule reports a
/// diagnostic and fails.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    candidates: Vec<Value>,
}

impl OneOf {
    /// Creates the rule from any list of JSON-convertible candidates.
    pub fn new<I, V>(candidates: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// The accepted values.
    pub fn candidates(&self) -> &[Value] {
        &self.candidates
    }
}

impl Rule for OneOf {
    fn evaluate(&self, value: &Value, ctx: &RuleContext<'_>) -> Outcome {
        const MESSAGE: &str = "':value' is not an allowed value.";

        if self.candidates.is_empty() {
            ctx.misconfigured("one_of", "candidate list is empty");
            return Outcome::fail(MESSAGE);
        }
        Outcome::check(self.candidates.contains(value), || MESSAGE.into())
    }

    fn name(&self) -> &str {
        "one_of"
    }
}

/// Creates a membership rule.
pub fn one_of<I, V>(candidates: I) -> OneOf
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    OneOf::new(candidates)
}
