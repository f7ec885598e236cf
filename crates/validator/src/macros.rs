//! Macros for creating rules with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::rule;
//! use fieldcheck_validator::foundation::Outcome;
//!
//! // Unit rule (no configuration)
//! rule! {
//!     pub NotNull;
//!     name = "not_null";
//!     evaluate(value, ctx) { Outcome::check(!value.is_null(), || "Must not be null.".into()) }
//!     fn not_null();
//! }
//!
//! // Rule with configuration
//! rule! {
//!     #[derive(Copy, PartialEq)]
//!     pub AtLeast { min: f64 };
//!     name = "at_least";
//!     evaluate(self, value, ctx) {
//!         Outcome::check(value.as_f64().is_some_and(|n| n >= self.min), || "Too small.".into())
//!     }
//!     fn at_least(min: f64);
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, [`Rule`](crate::foundation::Rule)
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub Required;
///     name = "required";
///     evaluate(value, ctx) { ... }
///     fn required();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MaxLength { max: i64 };
///     name = "max_length";
///     evaluate(self, value, ctx) { ... }
///     fn max_length(max: i64);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Unit rule (no fields) + factory fn ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        name = $rule_name:literal;
        evaluate($value:ident, $ctx:ident) $body:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn evaluate(
                &self,
                $value: &$crate::Value,
                $ctx: &$crate::foundation::RuleContext<'_>,
            ) -> $crate::foundation::Outcome $body

            fn name(&self) -> &str {
                $rule_name
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        name = $rule_name:literal;
        evaluate($self_:ident, $value:ident, $ctx:ident) $body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn evaluate(
                &$self_,
                $value: &$crate::Value,
                $ctx: &$crate::foundation::RuleContext<'_>,
            ) -> $crate::foundation::Outcome $body

            fn name(&self) -> &str {
                $rule_name
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{CollectingSink, Outcome, Rule, RuleContext};
    use serde_json::json;

    crate::rule! {
        /// Test rule: value must be `true`.
        pub IsTrue;
        name = "is_true";
        evaluate(value, ctx) { Outcome::check(value.as_bool() == Some(true), || "Must be true.".into()) }
        fn is_true();
    }

    crate::rule! {
        /// Test rule: value must be at least `min`.
        #[derive(Copy, PartialEq)]
        pub AtLeast { min: f64 };
        name = "at_least";
        evaluate(self, value, ctx) {
            Outcome::check(value.as_f64().is_some_and(|n| n >= self.min), || "Too small.".into())
        }
        fn at_least(min: f64);
    }

    #[test]
    fn unit_rule() {
        let root = json!({});
        let sink = CollectingSink::new();
        let ctx = RuleContext::new("flag", &root, &root, &sink);

        assert!(is_true().evaluate(&json!(true), &ctx).is_valid);
        assert!(!is_true().evaluate(&json!(false), &ctx).is_valid);
        assert_eq!(IsTrue.name(), "is_true");
    }

    #[test]
    fn struct_rule() {
        let root = json!({});
        let sink = CollectingSink::new();
        let ctx = RuleContext::new("n", &root, &root, &sink);

        let rule = at_least(2.0);
        assert_eq!(rule, AtLeast::new(2.0));
        assert!(rule.evaluate(&json!(3), &ctx).is_valid);
        assert_eq!(rule.evaluate(&json!(1), &ctx).error_message, "Too small.");
        assert_eq!(rule.name(), "at_least");
    }
}
