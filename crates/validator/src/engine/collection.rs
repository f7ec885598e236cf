//! Indexed validation of collections.

use serde::Serialize;

use crate::engine::{CollectionMode, Engine, FieldErrors, ObjectReport, RuleSet};
use crate::foundation::PropertySource;

/// Validation errors of one collection element, keyed by its position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedErrors<'a, T> {
    /// Position of the element in the validated slice.
    pub index: usize,
    /// Failure messages per invalid property; empty for a valid element.
    pub errors: FieldErrors,
    /// The element itself.
    pub validated_object: &'a T,
}

impl<T> IndexedErrors<'_, T> {
    /// Returns true if the element has no failures.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Engine {
    /// Validates every element of `items` against `rules`.
    ///
    /// Each element is the root for its own rules. Entries come back in
    /// input order; whether valid elements are included is decided by
    /// [`EngineConfig::collection_mode`](crate::engine::EngineConfig::collection_mode).
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let rows = vec![json!({"name": "ok"}), json!({"name": ""})];
    /// let errors = Engine::new().validate_collection(&rows, &RuleSet::new().rule("name", required()));
    /// assert_eq!(errors.len(), 1);
    /// assert_eq!(errors[0].index, 1);
    /// ```
    pub fn validate_collection<'a, T: PropertySource>(
        &self,
        items: &'a [T],
        rules: &RuleSet,
    ) -> Vec<IndexedErrors<'a, T>> {
        self.collect_indexed(items, None, rules)
    }

    /// Validates every element of `items` against `rules`, with `root` as
    /// the root object of every rule.
    ///
    /// Use this when elements are nested in a larger document whose other
    /// properties the rules compare against.
    pub fn validate_collection_with_root<'a, T: PropertySource>(
        &self,
        items: &'a [T],
        root: &dyn PropertySource,
        rules: &RuleSet,
    ) -> Vec<IndexedErrors<'a, T>> {
        self.collect_indexed(items, Some(root), rules)
    }

    fn collect_indexed<'a, T: PropertySource>(
        &self,
        items: &'a [T],
        root: Option<&dyn PropertySource>,
        rules: &RuleSet,
    ) -> Vec<IndexedErrors<'a, T>> {
        let mode = self.config().collection_mode;
        let span = tracing::debug_span!("validate_collection", items = items.len(), ?mode);
        let _guard = span.enter();

        let entries: Vec<_> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let root: &dyn PropertySource = match root {
                    Some(root) => root,
                    None => item,
                };
                let results = self.evaluate_object_with_root(item, root, rules);
                let report = ObjectReport::from_results(&results);
                if report.is_valid && mode == CollectionMode::InvalidOnly {
                    return None;
                }
                Some(IndexedErrors {
                    index,
                    errors: report.errors,
                    validated_object: item,
                })
            })
            .collect();

        tracing::debug!(
            reported = entries.len(),
            invalid = entries.iter().filter(|entry| !entry.is_valid()).count(),
            "validated collection"
        );
        entries
    }
}
