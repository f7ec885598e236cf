//! Format rules: regular expressions and email addresses.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::foundation::{Outcome, Rule, RuleContext};
use crate::rules::type_mismatch;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap()
});

// ============================================================================
// REGEX
// ============================================================================

/// Validates that a string matches a regular expression.
///
/// An invalid pattern does not fail construction: the rule reports a
/// diagnostic and fails every value it sees.
#[derive(Debug, Clone)]
pub struct Matches {
    pattern: Result<Regex, String>,
}

impl Matches {
    /// Compiles `pattern`.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: Regex::new(pattern).map_err(|err| err.to_string()),
        }
    }

    /// Wraps an already compiled expression.
    #[must_use]
    pub fn from_regex(regex: Regex) -> Self {
        Self { pattern: Ok(regex) }
    }

    /// Returns true if the pattern compiled.
    pub fn is_well_formed(&self) -> bool {
        self.pattern.is_ok()
    }
}

impl Rule for Matches {
    fn evaluate(&self, value: &Value, ctx: &RuleContext<'_>) -> Outcome {
        const MESSAGE: &str = "The value ':value' does not match the required format.";

        let regex = match &self.pattern {
            Ok(regex) => regex,
            Err(reason) => {
                ctx.misconfigured("matches", format!("invalid pattern: {reason}"));
                return Outcome::fail(MESSAGE);
            }
        };
        match value {
            Value::String(s) => Outcome::check(regex.is_match(s), || MESSAGE.into()),
            other => type_mismatch("a string", other),
        }
    }

    fn name(&self) -> &str {
        "matches"
    }
}

/// Creates a regex rule.
#[must_use]
pub fn matches(pattern: &str) -> Matches {
    Matches::new(pattern)
}

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Validates email address format.
    ///
    /// Uses a simple but effective pattern; the domain needs at least one dot.
    pub Email;
    name = "email";
    evaluate(value, ctx) {
        match value {
            Value::String(s) => Outcome::check(EMAIL_REGEX.is_match(s), || {
                "':value' is not a valid email address.".into()
            }),
            other => type_mismatch("a string", other),
        }
    }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================
