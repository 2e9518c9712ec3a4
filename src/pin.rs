//! Pin/scrub controller: holds an element in place across a scroll range and maps scroll
//! position within that range linearly onto animation progress.

use crate::foundation::error::{RevealError, RevealResult};

/// Validated scroll range `[start, end]` with `end > start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinRange {
    start: f64,
    end: f64,
}

impl PinRange {
    /// Reject ranges where `end <= start` (progress would divide by zero or run backwards).
    pub fn new(start: f64, end: f64) -> RevealResult<Self> {
        if !(start.is_finite() && end.is_finite()) {
            return Err(RevealError::configuration("pin range bounds must be finite"));
        }
        if end <= start {
            return Err(RevealError::configuration(format!(
                "pin range end ({end}) must be greater than start ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Scroll offset where pinning begins.
    pub fn start(self) -> f64 {
        self.start
    }

    /// Scroll offset where pinning ends.
    pub fn end(self) -> f64 {
        self.end
    }

    /// Length of the pinned scroll distance.
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// `clamp((scroll - start) / (end - start), 0, 1)`.
    pub fn progress(self, scroll: f64) -> f64 {
        ((scroll - self.start) / self.span()).clamp(0.0, 1.0)
    }

    /// Translation that keeps the pinned element visually stationary.
    pub fn offset(self, scroll: f64) -> f64 {
        (scroll - self.start).clamp(0.0, self.span())
    }

    /// Phase for a scroll offset.
    pub fn phase(self, scroll: f64) -> PinPhase {
        if scroll < self.start {
            PinPhase::Unpinned
        } else if scroll > self.end {
            PinPhase::UnpinnedPast
        } else {
            PinPhase::Pinning
        }
    }
}

/// Where the scroll offset sits relative to a pin range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize)]
pub enum PinPhase {
    /// Before `start`: normal flow, progress 0.
    #[default]
    Unpinned,
    /// Inside `[start, end]`: held in place, progress follows scroll.
    Pinning,
    /// After `end`: released, progress 1.
    UnpinnedPast,
}

/// Boundary crossing detected between two pin updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum PinCrossing {
    /// Crossed `start` scrolling forward.
    Enter,
    /// Crossed `end` scrolling forward.
    Leave,
    /// Crossed `end` scrolling backward.
    EnterBack,
    /// Crossed `start` scrolling backward.
    LeaveBack,
}

/// Result of feeding one scroll offset to a [`PinController`].
#[derive(Clone, Debug, PartialEq)]
pub struct PinUpdate {
    /// Phase after the update.
    pub phase: PinPhase,
    /// Scroll progress through the range.
    pub progress: f64,
    /// Translation holding the element in place.
    pub offset: f64,
    /// Boundaries crossed since the previous update, in crossing order.
    pub crossings: Vec<PinCrossing>,
}

/// Stateful tracker for one pinned region.
#[derive(Clone, Debug)]
pub struct PinController {
    range: PinRange,
    phase: PinPhase,
}

impl PinController {
    /// Start unpinned.
    pub fn new(range: PinRange) -> Self {
        Self {
            range,
            phase: PinPhase::Unpinned,
        }
    }

    /// The tracked range.
    pub fn range(&self) -> PinRange {
        self.range
    }

    /// Replace the range (e.g. after a resize) without touching the phase.
    pub fn set_range(&mut self, range: PinRange) {
        self.range = range;
    }

    /// Phase after the latest update.
    pub fn phase(&self) -> PinPhase {
        self.phase
    }

    /// Feed the current scroll offset.
    ///
    /// Progress and offset depend only on `scroll`, so scrolling back over the same offsets
    /// reproduces exactly the same values in mirror order.
    pub fn update(&mut self, scroll: f64) -> PinUpdate {
        use PinCrossing::*;
        use PinPhase::*;

        let next = self.range.phase(scroll);
        let crossings = match (self.phase, next) {
            (Unpinned, Pinning) => vec![Enter],
            (Unpinned, UnpinnedPast) => vec![Enter, Leave],
            (Pinning, UnpinnedPast) => vec![Leave],
            (UnpinnedPast, Pinning) => vec![EnterBack],
            (UnpinnedPast, Unpinned) => vec![EnterBack, LeaveBack],
            (Pinning, Unpinned) => vec![LeaveBack],
            _ => Vec::new(),
        };
        self.phase = next;
        PinUpdate {
            phase: next,
            progress: self.range.progress(scroll),
            offset: self.range.offset(scroll),
            crossings,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/pin.rs"]
mod tests;
