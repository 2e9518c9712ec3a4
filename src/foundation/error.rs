/// Result alias used across the crate.
pub type RevealResult<T> = Result<T, RevealError>;

/// Error taxonomy of the reveal engine.
///
/// Configuration errors are programming mistakes in content data (bad easing id, empty step,
/// degenerate pin range) and are raised at construction. Missing targets degrade to static content
/// and are normally only logged; the variant exists for callers that resolve geometry eagerly.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid timeline, trigger, pin or page configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A trigger or animation target could not be resolved in the host layout.
    #[error("missing target: {0}")]
    MissingTarget(String),

    /// An internal registry invariant was violated (e.g. a one-shot region firing twice).
    #[error("invariant violated: {0}")]
    Invariant(String),

    /// Page description (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error bubbled up from a dependency.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Configuration`].
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`RevealError::MissingTarget`].
    pub fn missing_target(msg: impl Into<String>) -> Self {
        Self::MissingTarget(msg.into())
    }

    /// Build a [`RevealError::Invariant`].
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }

    /// Build a [`RevealError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
