use std::{fmt, str::FromStr};

use crate::foundation::{
    core::{Rect, Size},
    error::{RevealError, RevealResult},
};

/// A point along an element or along the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Leading edge.
    Top,
    /// Midpoint.
    Center,
    /// Trailing edge.
    Bottom,
    /// Fraction of the length (`80%` is `Percent(0.8)`).
    Percent(f64),
    /// Fixed distance from the leading edge.
    Px(f64),
}

impl Anchor {
    /// Parse `top`, `center`, `bottom`, `80%`, `120px` or `120`.
    pub fn parse(s: &str) -> RevealResult<Self> {
        let s = s.trim();
        let bad = || RevealError::configuration(format!("invalid boundary anchor \"{s}\""));
        match s {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => {
                if let Some(p) = s.strip_suffix('%') {
                    let v = p.trim().parse::<f64>().map_err(|_| bad())?;
                    return Ok(Self::Percent(v / 100.0));
                }
                let px = s.strip_suffix("px").unwrap_or(s);
                px.trim().parse::<f64>().map(Self::Px).map_err(|_| bad())
            }
        }
    }

    /// Offset of this anchor along a span of length `len`.
    pub fn offset_in(self, len: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => len / 2.0,
            Self::Bottom => len,
            Self::Percent(p) => p * len,
            Self::Px(px) => px,
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Top => f.write_str("top"),
            Self::Center => f.write_str("center"),
            Self::Bottom => f.write_str("bottom"),
            Self::Percent(p) => write!(f, "{}%", p * 100.0),
            Self::Px(px) => write!(f, "{px}px"),
        }
    }
}

/// Scroll position at which a trigger region starts or ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Boundary {
    /// Absolute scroll offset in px (`80`).
    Scroll(f64),
    /// Scroll offset at which the element anchor meets the viewport anchor (`"top 80%"`).
    Edge {
        /// Point on the trigger element.
        element: Anchor,
        /// Point on the viewport.
        viewport: Anchor,
    },
    /// Distance past the resolved start (`"+=600"`); only meaningful as an end boundary.
    AfterStart(f64),
}

impl Boundary {
    /// `"top <percent>%"`, the usual reveal threshold.
    pub fn top_at(percent: f64) -> Self {
        Self::Edge {
            element: Anchor::Top,
            viewport: Anchor::Percent(percent / 100.0),
        }
    }

    /// Parse the textual forms used in choreography data.
    pub fn parse(s: &str) -> RevealResult<Self> {
        let s = s.trim();
        if let Some(d) = s.strip_prefix("+=") {
            let d = d.trim().strip_suffix("px").unwrap_or(d.trim());
            return d.parse::<f64>().map(Self::AfterStart).map_err(|_| {
                RevealError::configuration(format!("invalid relative boundary \"{s}\""))
            });
        }
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(single), None, None) => match Anchor::parse(single)? {
                Anchor::Px(px) => Ok(Self::Scroll(px)),
                _ => Err(RevealError::configuration(format!(
                    "boundary \"{s}\" needs both an element and a viewport anchor"
                ))),
            },
            (Some(el), Some(vp), None) => Ok(Self::Edge {
                element: Anchor::parse(el)?,
                viewport: Anchor::parse(vp)?,
            }),
            _ => Err(RevealError::configuration(format!(
                "invalid boundary \"{s}\""
            ))),
        }
    }

    /// Whether resolving this boundary needs a trigger element.
    pub fn needs_element(&self) -> bool {
        matches!(self, Self::Edge { .. })
    }

    /// Resolve to an absolute scroll offset.
    ///
    /// `element` is the trigger element's document extent (if any) and `start` the already
    /// resolved start boundary, used by [`Boundary::AfterStart`].
    pub fn resolve(
        &self,
        element: Option<Rect>,
        viewport: Size,
        start: Option<f64>,
    ) -> RevealResult<f64> {
        match *self {
            Self::Scroll(y) => Ok(y),
            Self::Edge {
                element: el,
                viewport: vp,
            } => {
                let rect = element.ok_or_else(|| {
                    RevealError::missing_target("edge boundary has no trigger element")
                })?;
                Ok(rect.y0 + el.offset_in(rect.height()) - vp.offset_in(viewport.height))
            }
            Self::AfterStart(d) => start.map(|s| s + d).ok_or_else(|| {
                RevealError::configuration("relative boundary used without a start boundary")
            }),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scroll(y) => write!(f, "{y}"),
            Self::Edge { element, viewport } => write!(f, "{element} {viewport}"),
            Self::AfterStart(d) => write!(f, "+={d}"),
        }
    }
}

impl FromStr for Boundary {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Boundary {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scroll(y) => serializer.serialize_f64(*y),
            other => serializer.collect_str(other),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Boundary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(y) => Ok(Self::Scroll(y)),
            Repr::Str(s) => Self::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/boundary.rs"]
mod tests;
