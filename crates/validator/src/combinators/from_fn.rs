//! Closure-backed rules.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::foundation::{Outcome, Rule, RuleContext};

/// A rule implemented by a closure returning an [`Outcome`].
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::prelude::*;
///
/// let positive = from_fn("positive", |value, _ctx| {
///     Outcome::check(value.as_f64().is_some_and(|n| n > 0.0), || {
///         ":value is not positive.".into()
///     })
/// });
/// ```
#[derive(Clone)]
pub struct FnRule<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> FnRule<F> {
    /// Creates a named closure rule.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Rule for FnRule<F>
where
    F: Fn(&Value, &RuleContext<'_>) -> Outcome + Send + Sync,
{
    fn evaluate(&self, value: &Value, ctx: &RuleContext<'_>) -> Outcome {
        (self.f)(value, ctx)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("name", &self.name)
            .field("f", &"<function>")
            .finish()
    }
}

/// Creates a rule from a closure.
pub fn from_fn<F>(name: impl Into<Cow<'static, str>>, f: F) -> FnRule<F>
where
    F: Fn(&Value, &RuleContext<'_>) -> Outcome + Send + Sync,
{
    FnRule::new(name, f)
}
