use std::fmt;

pub use kurbo::{Rect, Size};

/// Stable handle naming an animated element.
///
/// Section roots use their anchor id (`"sobre"`); nested elements are addressed by path segments
/// (`"sobre/reveal/2"`), which is also how the synthetic layout names child extents.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    /// Create a handle from any string-like id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Handle of the `index`-th nested element of kind `kind`.
    pub fn child(&self, kind: &str, index: usize) -> Self {
        Self(format!("{}/{kind}/{index}", self.0))
    }

    /// Handle of a single named nested element.
    pub fn part(&self, name: &str) -> Self {
        Self(format!("{}/{name}", self.0))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TargetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Direction of the latest scroll movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ScrollDirection {
    /// No movement since the previous pass (or first pass).
    #[default]
    Still,
    /// Scroll offset increased.
    Forward,
    /// Scroll offset decreased.
    Backward,
}

impl ScrollDirection {
    /// Direction of movement from `prev` to `next`.
    pub fn between(prev: f64, next: f64) -> Self {
        if next > prev {
            Self::Forward
        } else if next < prev {
            Self::Backward
        } else {
            Self::Still
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
