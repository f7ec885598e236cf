//! Field evaluation: one rule against one property.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::engine::{Engine, template};
use crate::foundation::traits::FALLBACK_MESSAGE;
use crate::foundation::{PropertySource, Rule, RuleContext};

/// The result of evaluating one rule against one property of one object.
///
/// `is_valid == false` always comes with a non-empty, already rendered
/// `error_message`; `is_valid == true` with an empty one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyValidationResult<'a, O> {
    /// The object the property was read from.
    #[serde(skip)]
    pub object: &'a O,
    /// Name of the evaluated property.
    pub property_name: String,
    /// The value the rule saw (`null` when the property is absent).
    pub property_value: Value,
    /// Whether the rule passed.
    pub is_valid: bool,
    /// Rendered failure message, empty on success.
    pub error_message: String,
}

/// Reads a property once; absent properties read as `null`.
pub(crate) fn read_property<O: PropertySource + ?Sized>(object: &O, name: &str) -> Value {
    object.property(name).map_or(Value::Null, Cow::into_owned)
}

impl Engine {
    /// Evaluates `rule` against `object[property]`.
    ///
    /// `root` is the top-level object under validation; rules comparing
    /// against other properties look there. For a top-level object, pass
    /// the object itself.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let form = json!({"password": "a", "confirmPassword": "b"});
    /// let result = Engine::new().validate_field(
    ///     "confirmPassword",
    ///     &form,
    ///     &form,
    ///     &equal_to_property("password"),
    /// );
    /// assert!(!result.is_valid);
    /// ```
    pub fn validate_field<'a, O: PropertySource>(
        &self,
        property: &str,
        object: &'a O,
        root: &dyn PropertySource,
        rule: &dyn Rule,
    ) -> PropertyValidationResult<'a, O> {
        let value = read_property(object, property);
        self.evaluate_value(property, &value, object, root, rule)
    }

    /// Evaluates `rule` against an already-read value.
    pub(crate) fn evaluate_value<'a, O: PropertySource>(
        &self,
        property: &str,
        value: &Value,
        object: &'a O,
        root: &dyn PropertySource,
        rule: &dyn Rule,
    ) -> PropertyValidationResult<'a, O> {
        let ctx = RuleContext::new(property, object, root, self.diagnostics());
        let outcome = rule.evaluate(value, &ctx);

        let error_message = if outcome.is_valid {
            String::new()
        } else {
            let rendered = template::render(&outcome.error_message, value);
            if rendered.trim().is_empty() {
                FALLBACK_MESSAGE.to_owned()
            } else {
                rendered.into_owned()
            }
        };

        tracing::trace!(
            property,
            rule = rule.name(),
            is_valid = outcome.is_valid,
            "evaluated rule"
        );

        PropertyValidationResult {
            object,
            property_name: property.to_owned(),
            property_value: value.clone(),
            is_valid: outcome.is_valid,
            error_message,
        }
    }
}
