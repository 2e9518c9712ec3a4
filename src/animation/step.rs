use std::{fmt, str::FromStr};

use smallvec::SmallVec;

use crate::{
    animation::{
        ease::Ease,
        value::{AnimValue, Property},
    },
    foundation::{
        core::TargetId,
        error::{RevealError, RevealResult},
    },
};

/// Where a step sits on its timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Offset from the current end of the timeline (`"+=0.2"`, `"-=0.6"`); negative values
    /// overlap the tail of earlier steps and `After(0.0)` simply appends.
    After(f64),
    /// Offset from the previous step's start (`"<"`, `"<0.1"`).
    WithPrevious(f64),
    /// Absolute time in seconds.
    At(f64),
}

impl Position {
    /// Parse the textual position forms used in choreography data.
    pub fn parse(s: &str) -> RevealResult<Self> {
        let s = s.trim();
        let num = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| RevealError::configuration(format!("invalid step position \"{s}\"")))
        };
        if s.is_empty() {
            return Ok(Self::default());
        }
        if let Some(v) = s.strip_prefix("+=") {
            return Ok(Self::After(num(v)?));
        }
        if let Some(v) = s.strip_prefix("-=") {
            return Ok(Self::After(-num(v)?));
        }
        if let Some(v) = s.strip_prefix('<') {
            if v.is_empty() {
                return Ok(Self::WithPrevious(0.0));
            }
            return Ok(Self::WithPrevious(num(v)?));
        }
        Ok(Self::At(num(s)?))
    }

    /// Resolve to an absolute start time.
    ///
    /// `timeline_end` is the furthest end of the steps placed so far and `prev_start` the start
    /// of the step placed immediately before.
    pub fn resolve(self, timeline_end: f64, prev_start: f64) -> f64 {
        match self {
            Self::After(offset) => timeline_end + offset,
            Self::WithPrevious(offset) => prev_start + offset,
            Self::At(t) => t,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::After(o) if o < 0.0 => write!(f, "-={}", -o),
            Self::After(o) => write!(f, "+={o}"),
            Self::WithPrevious(o) if o == 0.0 => f.write_str("<"),
            Self::WithPrevious(o) => write!(f, "<{o}"),
            Self::At(t) => write!(f, "{t}"),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::After(0.0)
    }
}

impl FromStr for Position {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One property interpolation inside a step.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    /// Driven property.
    pub property: Property,
    /// Value at step progress 0.
    pub from: AnimValue,
    /// Value at step progress 1.
    pub to: AnimValue,
}

/// Immutable animation step: one target, one duration, one easing, one or more tweens.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationStep {
    target: TargetId,
    tweens: SmallVec<[Tween; 2]>,
    duration: f64,
    ease: Ease,
    position: Position,
}

impl AnimationStep {
    /// Start building a step animating `target`.
    pub fn builder(target: impl Into<TargetId>) -> StepBuilder {
        StepBuilder::new(target)
    }

    /// Animated element.
    pub fn target(&self) -> &TargetId {
        &self.target
    }

    /// Property tweens, in declaration order.
    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    /// Duration in seconds (`> 0`).
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Easing applied to the step's local progress.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Requested placement on the timeline.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Copy of this step retargeted and repositioned; used by staggers.
    pub(crate) fn with_target_and_position(&self, target: TargetId, position: Position) -> Self {
        Self {
            target,
            position,
            ..self.clone()
        }
    }
}

/// Builder for [`AnimationStep`]; all validation happens in [`StepBuilder::build`].
#[derive(Clone, Debug)]
pub struct StepBuilder {
    target: TargetId,
    tweens: SmallVec<[(Property, Option<AnimValue>, Option<AnimValue>); 2]>,
    duration: f64,
    ease: Result<Ease, String>,
    position: Result<Position, String>,
}

impl StepBuilder {
    /// Start a step for `target` with a 0.5s linear default.
    pub fn new(target: impl Into<TargetId>) -> Self {
        Self {
            target: target.into(),
            tweens: SmallVec::new(),
            duration: 0.5,
            ease: Ok(Ease::Linear),
            position: Ok(Position::default()),
        }
    }

    /// Step duration in seconds.
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    /// Easing by id; unknown ids surface from [`Self::build`].
    pub fn ease(mut self, id: &str) -> Self {
        self.ease = Ease::parse(id).map_err(|e| e.to_string());
        self
    }

    /// Easing by value.
    pub fn ease_fn(mut self, ease: Ease) -> Self {
        self.ease = Ok(ease);
        self
    }

    /// Placement by textual form (`"-=0.6"`, `"<"`, `"1.2"`).
    pub fn at(mut self, position: &str) -> Self {
        self.position = Position::parse(position).map_err(|e| e.to_string());
        self
    }

    /// Placement by value.
    pub fn position(mut self, position: Position) -> Self {
        self.position = Ok(position);
        self
    }

    /// Tween `property` from `from` to `to`.
    pub fn tween(
        mut self,
        property: Property,
        from: impl Into<AnimValue>,
        to: impl Into<AnimValue>,
    ) -> Self {
        self.tweens
            .push((property, Some(from.into()), Some(to.into())));
        self
    }

    /// Tween `property` from `from` to its resting value.
    pub fn from(mut self, property: Property, from: impl Into<AnimValue>) -> Self {
        self.tweens.push((property, Some(from.into()), None));
        self
    }

    /// Tween `property` from its resting value to `to`.
    pub fn to(mut self, property: Property, to: impl Into<AnimValue>) -> Self {
        self.tweens.push((property, None, Some(to.into())));
        self
    }

    /// Shorthand for `from(Opacity, 0.0)`.
    pub fn fade_in(self) -> Self {
        self.from(Property::Opacity, 0.0)
    }

    /// Validate and freeze the step.
    pub fn build(self) -> RevealResult<AnimationStep> {
        let target = self.target;
        if target.as_str().is_empty() {
            return Err(RevealError::configuration("step target must be non-empty"));
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(RevealError::configuration(format!(
                "step for '{target}' must have a positive duration, got {}",
                self.duration
            )));
        }
        let ease = self.ease.map_err(RevealError::Configuration)?;
        let position = self.position.map_err(RevealError::Configuration)?;
        if self.tweens.is_empty() {
            return Err(RevealError::configuration(format!(
                "step for '{target}' animates no properties"
            )));
        }

        let mut tweens = SmallVec::new();
        for (property, from, to) in self.tweens {
            let resting = || {
                property.natural().ok_or_else(|| {
                    RevealError::configuration(format!(
                        "property '{property}' on '{target}' has no resting value; give both ends"
                    ))
                })
            };
            let from = match from {
                Some(v) => v,
                None => resting()?,
            };
            let to = match to {
                Some(v) => v,
                None => resting()?,
            };
            if !from.same_kind(&to) {
                return Err(RevealError::configuration(format!(
                    "property '{property}' on '{target}' mixes numeric and color values"
                )));
            }
            tweens.push(Tween { property, from, to });
        }

        Ok(AnimationStep {
            target,
            tweens,
            duration: self.duration,
            ease,
            position,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/step.rs"]
mod tests;
