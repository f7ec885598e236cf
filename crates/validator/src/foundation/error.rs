//! Construction-time errors
//!
//! Validation failures are never errors: they are reported as failed
//! [`Outcome`](crate::foundation::Outcome)s. The types here cover the
//! remaining case, a rule that cannot be built at all.

use std::borrow::Cow;

/// Error raised while constructing a rule or loading engine configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A predicate was declared with a blank failure template.
    #[error("predicate '{description}' has no error message")]
    MissingMessage {
        /// Description of the offending predicate.
        description: Cow<'static, str>,
    },

    /// Engine configuration could not be parsed.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
