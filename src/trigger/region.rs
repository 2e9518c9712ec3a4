use std::fmt;

use crate::{
    animation::timeline::SharedTimeline,
    foundation::{
        core::TargetId,
        error::{RevealError, RevealResult},
    },
    pin::PinRange,
    trigger::boundary::Boundary,
};

/// Callback invoked when a region crosses one of its boundaries.
pub type Callback = Box<dyn FnMut(&TriggerEvent)>;

/// How a region reacts to its boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMode {
    /// Fire once when scrolled past `start`, then never again.
    OneShot,
    /// Fire on every crossing of `start`, in either direction (style toggles).
    Toggle,
    /// Hold the element over `[start, end]` and scrub the animation with scroll progress.
    PinnedScrub,
}

/// Opaque, never-reused identifier of a registered region.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RegionHandle(pub(crate) u64);

impl RegionHandle {
    /// Raw registration sequence number.
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RegionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of boundary crossing (or scrub update) a pass observed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    /// `start` crossed scrolling forward.
    Enter,
    /// `start` crossed scrolling backward.
    LeaveBack,
    /// `end` crossed scrolling forward (pinned regions).
    Leave,
    /// `end` crossed scrolling backward (pinned regions).
    EnterBack,
    /// Pinned progress changed.
    Scrub {
        /// New progress in `[0, 1]`.
        progress: f64,
    },
}

/// One observation produced by an evaluation pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TriggerEvent {
    /// Region that produced the event.
    pub region: RegionHandle,
    /// The region's label.
    pub label: String,
    /// What happened.
    pub kind: EventKind,
    /// Scroll offset of the pass.
    pub scroll: f64,
}

/// A scroll range bound to an animation and a pair of callbacks.
pub struct TriggerRegion {
    label: String,
    trigger: Option<String>,
    start: Boundary,
    end: Option<Boundary>,
    mode: TriggerMode,
    animation: Option<SharedTimeline>,
    pin_target: Option<TargetId>,
    pub(crate) on_enter: Option<Callback>,
    pub(crate) on_leave_back: Option<Callback>,
}

impl TriggerRegion {
    fn new(label: impl Into<String>, start: Boundary, mode: TriggerMode) -> Self {
        Self {
            label: label.into(),
            trigger: None,
            start,
            end: None,
            mode,
            animation: None,
            pin_target: None,
            on_enter: None,
            on_leave_back: None,
        }
    }

    /// Region that plays its animation once when `start` is passed.
    pub fn one_shot(label: impl Into<String>, start: Boundary) -> Self {
        Self::new(label, start, TriggerMode::OneShot)
    }

    /// Region that plays on entering and reverses on leaving back, every time.
    pub fn toggle(label: impl Into<String>, start: Boundary) -> Self {
        Self::new(label, start, TriggerMode::Toggle)
    }

    /// Region pinned over `[start, end]` with a scrubbed animation.
    pub fn pinned(label: impl Into<String>, start: Boundary, end: Boundary) -> Self {
        Self::new(label, start, TriggerMode::PinnedScrub).pin(start, end)
    }

    /// Turn this region into a pinned-scrub region over `[start, end]`.
    pub fn pin(mut self, start: Boundary, end: Boundary) -> Self {
        self.mode = TriggerMode::PinnedScrub;
        self.start = start;
        self.end = Some(end);
        self
    }

    /// Element whose extent resolves edge boundaries.
    pub fn trigger(mut self, element_id: impl Into<String>) -> Self {
        self.trigger = Some(element_id.into());
        self
    }

    /// Element held stationary while pinned (defaults to the trigger element).
    pub fn pin_target(mut self, target: impl Into<TargetId>) -> Self {
        self.pin_target = Some(target.into());
        self
    }

    /// Timeline driven by this region.
    pub fn animation(mut self, timeline: SharedTimeline) -> Self {
        self.animation = Some(timeline);
        self
    }

    /// Callback for forward crossings of `start`.
    pub fn on_enter(mut self, f: impl FnMut(&TriggerEvent) + 'static) -> Self {
        self.on_enter = Some(Box::new(f));
        self
    }

    /// Callback for backward crossings of `start`.
    ///
    /// A one-shot region that asks for this becomes a toggle, so both callbacks run on every
    /// crossing.
    pub fn on_leave_back(mut self, f: impl FnMut(&TriggerEvent) + 'static) -> Self {
        if self.mode == TriggerMode::OneShot {
            self.mode = TriggerMode::Toggle;
        }
        self.on_leave_back = Some(Box::new(f));
        self
    }

    /// Label used in events and logs.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Trigger element id.
    pub fn trigger_id(&self) -> Option<&str> {
        self.trigger.as_deref()
    }

    /// Start boundary.
    pub fn start(&self) -> Boundary {
        self.start
    }

    /// End boundary (pinned regions only).
    pub fn end(&self) -> Option<Boundary> {
        self.end
    }

    /// Reaction mode.
    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Driven timeline, if any.
    pub fn timeline(&self) -> Option<&SharedTimeline> {
        self.animation.as_ref()
    }

    /// Element receiving the pin offset.
    pub fn pinned_element(&self) -> Option<TargetId> {
        self.pin_target
            .clone()
            .or_else(|| self.trigger.as_deref().map(TargetId::new))
    }

    /// Static checks that do not need a layout.
    pub fn validate(&self) -> RevealResult<()> {
        let label = &self.label;
        if label.trim().is_empty() {
            return Err(RevealError::configuration("trigger region label must be non-empty"));
        }
        if matches!(self.start, Boundary::AfterStart(_)) {
            return Err(RevealError::configuration(format!(
                "region '{label}': start boundary cannot be relative to itself"
            )));
        }
        let needs_element =
            self.start.needs_element() || self.end.is_some_and(|e| e.needs_element());
        if needs_element && self.trigger.is_none() {
            return Err(RevealError::configuration(format!(
                "region '{label}': edge boundaries need a trigger element"
            )));
        }
        match (self.mode, self.end) {
            (TriggerMode::PinnedScrub, None) => Err(RevealError::configuration(format!(
                "region '{label}': pinned regions need an end boundary"
            ))),
            (TriggerMode::PinnedScrub, Some(end)) => {
                if self.pinned_element().is_none() {
                    return Err(RevealError::configuration(format!(
                        "region '{label}': pinned regions need a trigger or pin target"
                    )));
                }
                match (self.start, end) {
                    (Boundary::Scroll(s), Boundary::Scroll(e)) => PinRange::new(s, e).map(|_| ()),
                    (_, Boundary::AfterStart(d)) if d <= 0.0 => {
                        Err(RevealError::configuration(format!(
                            "region '{label}': pin length must be > 0, got {d}"
                        )))
                    }
                    _ => Ok(()),
                }
            }
            (_, Some(_)) => Err(RevealError::configuration(format!(
                "region '{label}': only pinned regions take an end boundary"
            ))),
            (_, None) => Ok(()),
        }
    }
}

impl fmt::Debug for TriggerRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerRegion")
            .field("label", &self.label)
            .field("trigger", &self.trigger)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("mode", &self.mode)
            .field("animated", &self.animation.is_some())
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave_back", &self.on_leave_back.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/region.rs"]
mod tests;
