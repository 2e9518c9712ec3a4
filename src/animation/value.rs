use std::{fmt, str::FromStr};

use crate::foundation::error::{RevealError, RevealResult};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Straight-alpha RGBA color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Build a color from channels in `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels and a `[0, 1]` alpha.
    pub fn from_rgb8(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            a.clamp(0.0, 1.0),
        )
    }

    /// Fully transparent black, what CSS calls `transparent`.
    pub fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Parse a CSS color literal: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)`,
    /// or `transparent`.
    pub fn parse(s: &str) -> RevealResult<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::transparent());
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| bad_color(s));
        }
        let body = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|b| b.strip_suffix(')'))
            .ok_or_else(|| bad_color(s))?;
        let parts = body
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| bad_color(s))?;
        let channel = |v: f64| (v / 255.0).clamp(0.0, 1.0);
        match parts[..] {
            [r, g, b] => Ok(Self::new(channel(r), channel(g), channel(b), 1.0)),
            [r, g, b, a] => Ok(Self::new(
                channel(r),
                channel(g),
                channel(b),
                a.clamp(0.0, 1.0),
            )),
            _ => Err(bad_color(s)),
        }
    }

    /// Quantize to 8-bit channels (alpha included).
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}

fn bad_color(s: &str) -> RevealError {
    RevealError::configuration(format!("invalid color literal \"{s}\""))
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    fn nibble(c: u8) -> Option<u8> {
        (c as char).to_digit(16).map(|d| d as u8)
    }
    let bytes = hex.as_bytes();
    let byte_at = |i: usize| Some(nibble(bytes[i])? * 16 + nibble(bytes[i + 1])?);
    match bytes.len() {
        3 | 4 => {
            let expand = |i: usize| nibble(bytes[i]).map(|n| n * 17);
            let a = if bytes.len() == 4 {
                f64::from(expand(3)?) / 255.0
            } else {
                1.0
            };
            Some(Rgba::from_rgb8(expand(0)?, expand(1)?, expand(2)?, a))
        }
        6 | 8 => {
            let a = if bytes.len() == 8 {
                f64::from(byte_at(6)?) / 255.0
            } else {
                1.0
            };
            Some(Rgba::from_rgb8(byte_at(0)?, byte_at(2)?, byte_at(4)?, a))
        }
        _ => None,
    }
}

impl Lerp for Rgba {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: f64::lerp(&a.r, &b.r, t),
            g: f64::lerp(&a.g, &b.g, t),
            b: f64::lerp(&a.b, &b.b, t),
            a: f64::lerp(&a.a, &b.a, t),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.to_rgba8();
        write!(f, "rgba({r},{g},{b},{:.3})", self.a)
    }
}

/// A value a tween can interpolate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimValue {
    /// Unitless or pixel number.
    Number(f64),
    /// RGBA color.
    Color(Rgba),
}

impl AnimValue {
    /// Return `true` when both values can be interpolated with each other.
    pub fn same_kind(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Number(_), Self::Number(_)) | (Self::Color(_), Self::Color(_))
        )
    }

    /// Numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Color(_) => None,
        }
    }

    /// Color payload, if this is a color.
    pub fn as_color(&self) -> Option<Rgba> {
        match self {
            Self::Color(c) => Some(*c),
            Self::Number(_) => None,
        }
    }
}

impl Lerp for AnimValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Number(x), Self::Number(y)) => Self::Number(f64::lerp(x, y, t)),
            (Self::Color(x), Self::Color(y)) => Self::Color(Rgba::lerp(x, y, t)),
            // Mixed kinds are rejected when steps are built; snap rather than blend.
            _ => {
                if t < 1.0 {
                    *a
                } else {
                    *b
                }
            }
        }
    }
}

impl From<f64> for AnimValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Rgba> for AnimValue {
    fn from(value: Rgba) -> Self {
        Self::Color(value)
    }
}

impl fmt::Display for AnimValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v:.3}"),
            Self::Color(c) => c.fmt(f),
        }
    }
}

/// Style property a tween drives.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Horizontal translation in px.
    TranslateX,
    /// Vertical translation in px.
    TranslateY,
    /// Uniform scale factor.
    Scale,
    /// Background color.
    BackgroundColor,
    /// Bottom border color.
    BorderColor,
    /// Backdrop blur radius in px.
    BackdropBlur,
    /// Vertical padding in px.
    PaddingY,
    /// Offset applied to a pinned element to hold it in place, in px.
    PinOffset,
    /// Any other host-defined property.
    Custom(String),
}

impl Property {
    /// CSS-ish name of the property.
    pub fn name(&self) -> &str {
        match self {
            Self::Opacity => "opacity",
            Self::TranslateX => "x",
            Self::TranslateY => "y",
            Self::Scale => "scale",
            Self::BackgroundColor => "backgroundColor",
            Self::BorderColor => "borderBottomColor",
            Self::BackdropBlur => "backdropBlur",
            Self::PaddingY => "paddingY",
            Self::PinOffset => "pin-offset",
            Self::Custom(name) => name,
        }
    }

    /// Resting value of the property, the implicit `to` of a `from` tween.
    pub fn natural(&self) -> Option<AnimValue> {
        match self {
            Self::Opacity | Self::Scale => Some(AnimValue::Number(1.0)),
            Self::TranslateX | Self::TranslateY | Self::BackdropBlur | Self::PinOffset => {
                Some(AnimValue::Number(0.0))
            }
            Self::BackgroundColor | Self::BorderColor => {
                Some(AnimValue::Color(Rgba::transparent()))
            }
            Self::PaddingY | Self::Custom(_) => None,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let p = match s {
            "opacity" => Self::Opacity,
            "x" => Self::TranslateX,
            "y" => Self::TranslateY,
            "scale" => Self::Scale,
            "backgroundColor" => Self::BackgroundColor,
            "borderBottomColor" => Self::BorderColor,
            "backdropBlur" => Self::BackdropBlur,
            "paddingY" => Self::PaddingY,
            "pin-offset" => Self::PinOffset,
            "" => return Err(RevealError::configuration("empty property name")),
            other => Self::Custom(other.to_owned()),
        };
        Ok(p)
    }
}

impl serde::Serialize for Property {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for Property {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
