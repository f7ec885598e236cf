//! Presence rule

use crate::foundation::{Outcome, is_blank};

crate::rule! {
    /// Fails when the value is absent, `null`, a blank string, or an empty
    /// array or object.
    pub Required;
    name = "required";
    evaluate(value, ctx) {
        Outcome::check(!is_blank(value), || "This field is required.".into())
    }
    fn required();
}
