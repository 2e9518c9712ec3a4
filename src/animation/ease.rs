use std::{fmt, str::FromStr};

use crate::foundation::error::{RevealError, RevealResult};

/// Direction variant of a named easing family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    /// Accelerate from rest.
    In,
    /// Decelerate into rest.
    Out,
    /// Accelerate, then decelerate.
    InOut,
}

impl Curve {
    fn suffix(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inOut",
        }
    }
}

const BACK_OVERSHOOT: f64 = 1.70158;

/// Easing functions used to map normalized step progress.
///
/// Ids follow the `family.curve` convention used by the page choreography (`"power3.out"`,
/// `"sine.inOut"`, `"none"`). A family without a curve suffix defaults to `out`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    /// Linear interpolation (`none`, `linear`, `power0`).
    Linear,
    /// Polynomial ease of degree `power + 1` (`power1` is quadratic, `power4` quintic).
    Power {
        /// Family index, 1..=4.
        power: u8,
        /// Curve direction.
        curve: Curve,
    },
    /// Sinusoidal ease.
    Sine(Curve),
    /// Exponential ease.
    Expo(Curve),
    /// Circular ease.
    Circ(Curve),
    /// Overshooting ease with the given overshoot amount.
    Back {
        /// Curve direction.
        curve: Curve,
        /// Overshoot strength (1.70158 by default).
        overshoot: f64,
    },
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier {
        /// First control point x, in `[0, 1]`.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, in `[0, 1]`.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Ease {
    /// Resolve an easing id, failing on anything unknown.
    pub fn parse(id: &str) -> RevealResult<Self> {
        let id = id.trim();
        if let Some(args) = id
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_cubic_bezier(args);
        }

        let (family, rest) = match id.split_once('.') {
            Some((f, r)) => (f, Some(r)),
            None => (id, None),
        };

        // `back.out(2.5)` carries its overshoot in parentheses.
        let (curve_id, param) = match rest {
            Some(r) => match r.split_once('(') {
                Some((c, p)) => {
                    let p = p.strip_suffix(')').ok_or_else(|| unknown(id))?;
                    let v = p.trim().parse::<f64>().map_err(|_| unknown(id))?;
                    (Some(c), Some(v))
                }
                None => (Some(r), None),
            },
            None => (None, None),
        };

        let curve = match curve_id {
            None | Some("out") => Curve::Out,
            Some("in") => Curve::In,
            Some("inOut") => Curve::InOut,
            Some(_) => return Err(unknown(id)),
        };

        if param.is_some() && family != "back" {
            return Err(unknown(id));
        }

        let ease = match family {
            "none" | "linear" | "power0" if curve_id.is_none() => Self::Linear,
            "power1" | "quad" => Self::Power { power: 1, curve },
            "power2" | "cubic" => Self::Power { power: 2, curve },
            "power3" | "quart" => Self::Power { power: 3, curve },
            "power4" | "quint" | "strong" => Self::Power { power: 4, curve },
            "sine" => Self::Sine(curve),
            "expo" => Self::Expo(curve),
            "circ" => Self::Circ(curve),
            "back" => Self::Back {
                curve,
                overshoot: param.unwrap_or(BACK_OVERSHOOT),
            },
            _ => return Err(unknown(id)),
        };
        Ok(ease)
    }

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power { power, curve } => {
                let e = i32::from(power) + 1;
                match curve {
                    Curve::In => t.powi(e),
                    Curve::Out => 1.0 - (1.0 - t).powi(e),
                    Curve::InOut => {
                        if t < 0.5 {
                            2f64.powi(e - 1) * t.powi(e)
                        } else {
                            1.0 - (-2.0 * t + 2.0).powi(e) / 2.0
                        }
                    }
                }
            }
            Self::Sine(curve) => {
                use std::f64::consts::{FRAC_PI_2, PI};
                match curve {
                    Curve::In => 1.0 - (t * FRAC_PI_2).cos(),
                    Curve::Out => (t * FRAC_PI_2).sin(),
                    Curve::InOut => -((PI * t).cos() - 1.0) / 2.0,
                }
            }
            Self::Expo(curve) => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                match curve {
                    Curve::In => 2f64.powf(10.0 * t - 10.0),
                    Curve::Out => 1.0 - 2f64.powf(-10.0 * t),
                    Curve::InOut => {
                        if t < 0.5 {
                            2f64.powf(20.0 * t - 10.0) / 2.0
                        } else {
                            (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                        }
                    }
                }
            }
            Self::Circ(curve) => match curve {
                Curve::In => 1.0 - (1.0 - t * t).sqrt(),
                Curve::Out => (1.0 - (t - 1.0).powi(2)).sqrt(),
                Curve::InOut => {
                    if t < 0.5 {
                        (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                    } else {
                        ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                    }
                }
            },
            Self::Back { curve, overshoot } => {
                let s = overshoot;
                match curve {
                    Curve::In => (s + 1.0) * t.powi(3) - s * t * t,
                    Curve::Out => {
                        let u = t - 1.0;
                        1.0 + (s + 1.0) * u.powi(3) + s * u * u
                    }
                    Curve::InOut => {
                        let c = s * 1.525;
                        if t < 0.5 {
                            ((2.0 * t).powi(2) * ((c + 1.0) * 2.0 * t - c)) / 2.0
                        } else {
                            ((2.0 * t - 2.0).powi(2) * ((c + 1.0) * (t * 2.0 - 2.0) + c) + 2.0)
                                / 2.0
                        }
                    }
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }
}

fn unknown(id: &str) -> RevealError {
    RevealError::configuration(format!("unknown easing id \"{id}\""))
}

fn parse_cubic_bezier(args: &str) -> RevealResult<Ease> {
    let vals = args
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| RevealError::configuration(format!("cubic-bezier arguments: {e}")))?;
    let [x1, y1, x2, y2] = vals[..] else {
        return Err(RevealError::configuration(
            "cubic-bezier takes exactly four arguments",
        ));
    };
    if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
        return Err(RevealError::configuration(
            "cubic-bezier x control points must be in [0, 1]",
        ));
    }
    Ok(Ease::CubicBezier { x1, y1, x2, y2 })
}

fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    fn sample_curve(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * t * a1 + 3.0 * omt * t * t * a2 + t * t * t
    }
    fn sample_curve_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * a1 + 6.0 * omt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    // Newton-Raphson, then bisection if the slope flattened out.
    let mut t = x;
    for _ in 0..8 {
        let x_t = sample_curve(x1, x2, t) - x;
        let d = sample_curve_derivative(x1, x2, t);
        if d.abs() < 1e-7 {
            break;
        }
        t = (t - x_t / d).clamp(0.0, 1.0);
    }
    if (sample_curve(x1, x2, t) - x).abs() > 1e-6 {
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..32 {
            let x_t = sample_curve(x1, x2, t);
            if (x_t - x).abs() < 1e-7 {
                break;
            }
            if x_t < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
    }
    sample_curve(y1, y2, t)
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Linear => f.write_str("none"),
            Self::Power { power, curve } => write!(f, "power{power}.{}", curve.suffix()),
            Self::Sine(c) => write!(f, "sine.{}", c.suffix()),
            Self::Expo(c) => write!(f, "expo.{}", c.suffix()),
            Self::Circ(c) => write!(f, "circ.{}", c.suffix()),
            Self::Back { curve, overshoot } => {
                if overshoot == BACK_OVERSHOOT {
                    write!(f, "back.{}", curve.suffix())
                } else {
                    write!(f, "back.{}({overshoot})", curve.suffix())
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl FromStr for Ease {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Ease {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Ease {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
