//! Error message templating
//!
//! Exactly one placeholder is recognised: [`VALUE_PLACEHOLDER`], replaced by
//! the offending value everywhere it appears.

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::display_value;

/// Token replaced by the stringified property value.
pub const VALUE_PLACEHOLDER: &str = ":value";

/// Substitutes `:value` in `template` with the stringified `value`.
///
/// Borrows the template unchanged when it has no placeholder.
pub fn render<'a>(template: &'a str, value: &Value) -> Cow<'a, str> {
    if template.contains(VALUE_PLACEHOLDER) {
        Cow::Owned(template.replace(VALUE_PLACEHOLDER, &display_value(value)))
    } else {
        Cow::Borrowed(template)
    }
}
