//! Length rules for strings and arrays
//!
//! String length is measured in Unicode scalar values (chars), not bytes.

use serde_json::Value;

use crate::foundation::Outcome;
use crate::rules::{length_bound, type_mismatch};

fn min_message(min: impl std::fmt::Display) -> String {
    format!("The minimum length for this field is {min}.")
}

fn max_message(max: impl std::fmt::Display) -> String {
    format!("The maximum length for this field is {max}.")
}

// ============================================================================
// STRING LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: i64 };
    name = "min_length";
    evaluate(self, value, ctx) {
        let Some(min) = length_bound(ctx, "min_length", self.min) else {
            return Outcome::fail(min_message(self.min));
        };
        match value {
            Value::String(s) => Outcome::check(s.chars().count() >= min, || min_message(min)),
            other => type_mismatch("a string", other),
        }
    }
    fn min_length(min: i64);
}

crate::rule! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: i64 };
    name = "max_length";
    evaluate(self, value, ctx) {
        let Some(max) = length_bound(ctx, "max_length", self.max) else {
            return Outcome::fail(max_message(self.max));
        };
        match value {
            Value::String(s) => Outcome::check(s.chars().count() <= max, || max_message(max)),
            other => type_mismatch("a string", other),
        }
    }
    fn max_length(max: i64);
}

// ============================================================================
// ARRAY LENGTH
// ============================================================================

crate::rule! {
    /// Validates that an array has at least `min` elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ArrayMinLen { min: i64 };
    name = "array_min_len";
    evaluate(self, value, ctx) {
        let Some(min) = length_bound(ctx, "array_min_len", self.min) else {
            return Outcome::fail(min_message(self.min));
        };
        match value {
            Value::Array(items) => Outcome::check(items.len() >= min, || min_message(min)),
            other => type_mismatch("an array", other),
        }
    }
    fn array_min_len(min: i64);
}

crate::rule! {
    /// Validates that an array has at most `max` elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ArrayMaxLen { max: i64 };
    name = "array_max_len";
    evaluate(self, value, ctx) {
        let Some(max) = length_bound(ctx, "array_max_len", self.max) else {
            return Outcome::fail(max_message(self.max));
        };
        match value {
            Value::Array(items) => Outcome::check(items.len() <= max, || max_message(max)),
            other => type_mismatch("an array", other),
        }
    }
    fn array_max_len(max: i64);
}
