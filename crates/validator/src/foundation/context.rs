//! Evaluation context handed to every rule.

use std::fmt;

use serde_json::Value;

use crate::foundation::{Diagnostic, DiagnosticSink, PropertySource};

/// Everything a rule may look at besides the value itself.
///
/// - [`root`](Self::root) is the top-level object under validation. Rules
///   that compare against another property (e.g. "confirm password")
///   resolve it here.
/// - [`owner`](Self::owner) is the object the property was read from. It
///   equals the root except when a collection is validated against an
///   explicit outer root.
/// - [`misconfigured`](Self::misconfigured) reports a broken rule
///   configuration to the engine's diagnostics sink.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    property: &'a str,
    owner: &'a dyn PropertySource,
    root: &'a dyn PropertySource,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> RuleContext<'a> {
    /// Creates a context for evaluating `property` of `owner`.
    pub fn new(
        property: &'a str,
        owner: &'a dyn PropertySource,
        root: &'a dyn PropertySource,
        diagnostics: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            property,
            owner,
            root,
            diagnostics,
        }
    }

    /// Name of the property being evaluated.
    pub fn property(&self) -> &'a str {
        self.property
    }

    /// The object the property belongs to.
    pub fn owner(&self) -> &'a dyn PropertySource {
        self.owner
    }

    /// The top-level object under validation.
    pub fn root(&self) -> &'a dyn PropertySource {
        self.root
    }

    /// Reads another property of the root object; absent properties read as `null`.
    pub fn root_property(&self, name: &str) -> Value {
        self.root
            .property(name)
            .map_or(Value::Null, std::borrow::Cow::into_owned)
    }

    /// Reports that `rule` is misconfigured. The caller is expected to fail.
    pub fn misconfigured(&self, rule: &str, detail: impl Into<String>) {
        self.diagnostics.report(Diagnostic {
            rule: rule.to_owned(),
            property: self.property.to_owned(),
            detail: detail.into(),
        });
    }
}

impl fmt::Debug for RuleContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleContext")
            .field("property", &self.property)
            .field("owner", &"<object>")
            .field("root", &"<object>")
            .finish()
    }
}
