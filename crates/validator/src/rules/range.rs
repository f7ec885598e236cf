//! Numeric bound rules
//!
//! Integer values are compared exactly against the bound, so precision is
//! not lost above 2^53.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::foundation::Outcome;
use crate::rules::type_mismatch;

/// Orders `n` relative to `bound`; `None` only for a NaN bound.
fn compare(n: &Number, bound: f64) -> Option<Ordering> {
    if let Some(i) = n.as_i64() {
        return compare_int(i128::from(i), bound);
    }
    if let Some(u) = n.as_u64() {
        return compare_int(i128::from(u), bound);
    }
    n.as_f64()?.partial_cmp(&bound)
}

fn compare_int(i: i128, bound: f64) -> Option<Ordering> {
    if bound.is_nan() {
        return None;
    }
    if bound >= i128::MAX as f64 {
        return Some(Ordering::Less);
    }
    if bound < i128::MIN as f64 {
        return Some(Ordering::Greater);
    }
    let floor = bound.floor();
    match i.cmp(&(floor as i128)) {
        Ordering::Equal if bound > floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

crate::rule! {
    /// Validates that a number is at least `min` (inclusive).
    #[derive(Copy, PartialEq)]
    pub Min { min: f64 };
    name = "min";
    evaluate(self, value, ctx) {
        let message = || format!("The minimum value for this field is {}.", self.min);
        if self.min.is_nan() {
            ctx.misconfigured("min", "bound is NaN");
            return Outcome::fail(message());
        }
        match value {
            Value::Number(n) => Outcome::check(
                matches!(compare(n, self.min), Some(Ordering::Greater | Ordering::Equal)),
                message,
            ),
            other => type_mismatch("a number", other),
        }
    }
    fn min(min: f64);
}

crate::rule! {
    /// Validates that a number is at most `max` (inclusive).
    #[derive(Copy, PartialEq)]
    pub Max { max: f64 };
    name = "max";
    evaluate(self, value, ctx) {
        let message = || format!("The maximum value for this field is {}.", self.max);
        if self.max.is_nan() {
            ctx.misconfigured("max", "bound is NaN");
            return Outcome::fail(message());
        }
        match value {
            Value::Number(n) => Outcome::check(
                matches!(compare(n, self.max), Some(Ordering::Less | Ordering::Equal)),
                message,
            ),
            other => type_mismatch("a number", other),
        }
    }
    fn max(max: f64);
}
