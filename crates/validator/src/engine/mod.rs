//! Validation engine
//!
//! Evaluates rules at three granularities:
//!
//! - [`Engine::validate_field`]: one rule against one property
//! - [`Engine::validate_object`]: a [`RuleSet`] against one object
//! - [`Engine::validate_collection`]: a [`RuleSet`] against every element
//!   of a slice, reporting failures by index
//!
//! An [`Engine`] is cheap to clone and holds no per-call state, so one
//! instance can serve concurrent validations. The free functions in this
//! module use a shared default engine that reports diagnostics to
//! `tracing`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fieldcheck_validator::prelude::*;
//!
//! let sink = Arc::new(CollectingSink::new());
//! let engine = Engine::builder()
//!     .collection_mode(CollectionMode::All)
//!     .diagnostics(sink.clone())
//!     .build();
//! ```

mod collection;
mod config;
mod field;
mod object;
pub mod template;

use std::fmt;
use std::sync::{Arc, LazyLock};

pub use collection::IndexedErrors;
pub use config::{CollectionMode, EngineConfig};
pub use field::PropertyValidationResult;
pub use object::{FieldErrors, ObjectReport, RuleSet};

use crate::foundation::{DiagnosticSink, PropertySource, Rule, TracingSink};

// ============================================================================
// ENGINE
// ============================================================================

/// Evaluates rules against properties, objects and collections.
#[derive(Clone)]
pub struct Engine {
    config: EngineConfig,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Engine {
    /// An engine with the default configuration, reporting diagnostics to `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with `config`, reporting diagnostics to `tracing`.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Starts building an engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// The configuration of this engine.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The sink misconfiguration diagnostics go to.
    pub fn diagnostics(&self) -> &dyn DiagnosticSink {
        self.diagnostics.as_ref()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            diagnostics: Arc::new(TracingSink),
        }
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    config: EngineConfig,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
}

impl EngineBuilder {
    /// Replaces the whole configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets which collection elements are reported.
    #[must_use = "builder methods must be chained or built"]
    pub fn collection_mode(mut self, mode: CollectionMode) -> Self {
        self.config.collection_mode = mode;
        self
    }

    /// Sends diagnostics to `sink` instead of `tracing`.
    #[must_use = "builder methods must be chained or built"]
    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Builds the engine.
    pub fn build(self) -> Engine {
        Engine {
            config: self.config,
            diagnostics: self.diagnostics.unwrap_or_else(|| Arc::new(TracingSink)),
        }
    }
}

impl fmt::Debug for EngineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineBuilder")
            .field("config", &self.config)
            .field("custom_diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

// ============================================================================
// DEFAULT ENGINE
// ============================================================================

static DEFAULT_ENGINE: LazyLock<Engine> = LazyLock::new(Engine::default);

/// [`Engine::validate_field`] on the default engine.
pub fn validate_field<'a, O: PropertySource>(
    property: &str,
    object: &'a O,
    root: &dyn PropertySource,
    rule: &dyn Rule,
) -> PropertyValidationResult<'a, O> {
    DEFAULT_ENGINE.validate_field(property, object, root, rule)
}

/// [`Engine::validate_object`] on the default engine.
pub fn validate_object<O: PropertySource>(object: &O, rules: &RuleSet) -> ObjectReport {
    DEFAULT_ENGINE.validate_object(object, rules)
}

/// [`Engine::validate_collection`] on the default engine.
pub fn validate_collection<'a, T: PropertySource>(
    items: &'a [T],
    rules: &RuleSet,
) -> Vec<IndexedErrors<'a, T>> {
    DEFAULT_ENGINE.validate_collection(items, rules)
}
