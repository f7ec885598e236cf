//! Object evaluation and aggregation
//!
//! A [`RuleSet`] binds ordered rule lists to property names. Evaluating an
//! object runs every rule of every property, without short-circuiting, and
//! folds the results into an [`ObjectReport`].

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::engine::field::{PropertyValidationResult, read_property};
use crate::foundation::{BoxedRule, PropertySource, Rule};

/// Failure messages per property.
///
/// Keys keep rule-set declaration order and messages keep rule evaluation
/// order. A property without failures has no entry.
pub type FieldErrors = IndexMap<String, Vec<String>>;

// ============================================================================
// RULE SET
// ============================================================================

/// Ordered mapping from property name to the rules bound to it.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::prelude::*;
///
/// let rules = RuleSet::new()
///     .rule("email", required())
///     .rule("email", email())
///     .rule("tags", array_max_len(5));
/// ```
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: IndexMap<String, Vec<BoxedRule>>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `rule` to the rules of `property`.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<R: Rule + 'static>(mut self, property: impl Into<String>, rule: R) -> Self {
        self.add(property, rule);
        self
    }

    /// Appends several already boxed rules to `property`.
    ///
    /// Registers the property even when `rules` is empty.
    #[must_use = "builder methods must be chained or built"]
    pub fn rules<I>(mut self, property: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = BoxedRule>,
    {
        self.rules.entry(property.into()).or_default().extend(rules);
        self
    }

    /// Appends `rule` to the rules of `property` in place.
    pub fn add<R: Rule + 'static>(&mut self, property: impl Into<String>, rule: R) -> &mut Self {
        self.rules
            .entry(property.into())
            .or_default()
            .push(Arc::new(rule));
        self
    }

    /// Property names in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Rules bound to `property`, empty if none.
    pub fn rules_for(&self, property: &str) -> &[BoxedRule] {
        self.rules
            .get(property)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates `(property, rules)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BoxedRule])> {
        self.rules
            .iter()
            .map(|(property, rules)| (property.as_str(), rules.as_slice()))
    }

    /// Number of properties with rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no property has rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total number of rules across all properties.
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (property, rules) in &self.rules {
            let names: Vec<&str> = rules.iter().map(|rule| rule.name()).collect();
            map.entry(property, &names);
        }
        map.finish()
    }
}

// ============================================================================
// OBJECT REPORT
// ============================================================================

/// Aggregated result of validating one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectReport {
    /// True iff no rule failed.
    pub is_valid: bool,
    /// Failure messages per invalid property.
    pub errors: FieldErrors,
}

impl ObjectReport {
    /// A report without failures.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: FieldErrors::new(),
        }
    }

    /// Folds individual results into a report.
    pub fn from_results<O>(results: &[PropertyValidationResult<'_, O>]) -> Self {
        let mut errors = FieldErrors::new();
        for result in results.iter().filter(|result| !result.is_valid) {
            errors
                .entry(result.property_name.clone())
                .or_default()
                .push(result.error_message.clone());
        }
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Failure messages of `property`, empty if it is valid.
    pub fn errors_for(&self, property: &str) -> &[String] {
        self.errors
            .get(property)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns true if `property` has no failures.
    pub fn is_property_valid(&self, property: &str) -> bool {
        self.errors_for(property).is_empty()
    }

    /// Total number of failure messages.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}

impl Default for ObjectReport {
    fn default() -> Self {
        Self::valid()
    }
}

// ============================================================================
// ENGINE
// ============================================================================

impl Engine {
    /// Runs every rule of `rules` against `object` and returns each result.
    ///
    /// Each property is read once and the same value is given to all of its
    /// rules. `object` is also the root.
    pub fn evaluate_object<'a, O: PropertySource>(
        &self,
        object: &'a O,
        rules: &RuleSet,
    ) -> Vec<PropertyValidationResult<'a, O>> {
        self.evaluate_object_with_root(object, object, rules)
    }

    /// Validates `object` against `rules`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let rules = RuleSet::new().rule("name", required());
    /// let report = Engine::new().validate_object(&json!({"name": ""}), &rules);
    /// assert_eq!(report.errors_for("name"), ["This field is required."]);
    /// ```
    pub fn validate_object<O: PropertySource>(&self, object: &O, rules: &RuleSet) -> ObjectReport {
        let report = ObjectReport::from_results(&self.evaluate_object(object, rules));
        tracing::debug!(
            properties = rules.len(),
            failures = report.error_count(),
            is_valid = report.is_valid,
            "validated object"
        );
        report
    }

    pub(crate) fn evaluate_object_with_root<'a, O: PropertySource>(
        &self,
        object: &'a O,
        root: &dyn PropertySource,
        rules: &RuleSet,
    ) -> Vec<PropertyValidationResult<'a, O>> {
        let mut results = Vec::with_capacity(rules.rule_count());
        for (property, bound) in rules.iter() {
            let value = read_property(object, property);
            for rule in bound {
                results.push(self.evaluate_value(property, &value, object, root, &**rule));
            }
        }
        results
    }
}

// ============================================================================
// TESTS
// ============================================================================
