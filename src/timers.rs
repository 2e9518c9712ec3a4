//! Frame-driven interval timers for the interactive feature cards.
//!
//! These run independently of the trigger registry: the page feeds them frame time and they
//! publish their state through the style sink.

use crate::{
    foundation::error::{RevealError, RevealResult},
    host::StyleSink,
};

/// Delay between two typed characters, in seconds.
pub const TYPE_INTERVAL: f64 = 0.03;
/// Delay between two card rotations, in seconds.
pub const ROTATE_INTERVAL: f64 = 4.0;
/// Index of the scheduling card in the feature grid.
pub const SCHEDULER_CARD: usize = 2;

/// Something advanced by animation frames.
pub trait FrameDriven {
    /// Advance by `dt` seconds and publish any change to `sink`. Returns whether state changed.
    fn frame(&mut self, dt: f64, sink: &mut dyn StyleSink) -> bool;
}

/// Accumulates frame time and reports whole periods.
#[derive(Clone, Debug, PartialEq)]
pub struct Interval {
    period: f64,
    elapsed: f64,
}

impl Interval {
    /// Interval firing every `period` seconds.
    pub fn new(period: f64) -> RevealResult<Self> {
        if !(period.is_finite() && period > 0.0) {
            return Err(RevealError::configuration(format!(
                "interval period must be > 0, got {period}"
            )));
        }
        Ok(Self {
            period,
            elapsed: 0.0,
        })
    }

    /// Period in seconds.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Add `dt` and return how many periods completed.
    pub fn advance(&mut self, dt: f64) -> u32 {
        if !(dt.is_finite() && dt > 0.0) {
            return 0;
        }
        self.elapsed += dt;
        // Tolerate float drift so 0.01 + 0.02 completes a 0.03 period.
        let whole = ((self.elapsed + 1e-9) / self.period).floor();
        self.elapsed = (self.elapsed - whole * self.period).max(0.0);
        whole as u32
    }

    /// Forget accumulated time.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Reveals a text one character per tick and stops at the end.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    shown: usize,
    total: usize,
    clock: Interval,
}

impl Typewriter {
    /// Typewriter over `text` typing one character every `per_char` seconds.
    pub fn new(text: impl Into<String>, per_char: f64) -> RevealResult<Self> {
        let text = text.into();
        let total = text.chars().count();
        Ok(Self {
            text,
            shown: 0,
            total,
            clock: Interval::new(per_char)?,
        })
    }

    /// Advance by `dt`; returns whether more text became visible.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.is_done() {
            return false;
        }
        let ticks = self.clock.advance(dt) as usize;
        let before = self.shown;
        self.shown = (self.shown + ticks).min(self.total);
        self.shown != before
    }

    /// Text typed so far.
    pub fn visible(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.shown)
            .map_or(self.text.len(), |(i, _)| i);
        &self.text[..end]
    }

    /// Characters typed so far.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Whether the whole text is visible.
    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }
}

/// Cycles an active index through `0..count`.
#[derive(Clone, Debug)]
pub struct Rotator {
    count: usize,
    active: usize,
    clock: Interval,
}

impl Rotator {
    /// Rotator over `count` items advancing every `period` seconds.
    pub fn new(count: usize, period: f64) -> RevealResult<Self> {
        if count == 0 {
            return Err(RevealError::configuration("rotator needs at least one item"));
        }
        Ok(Self {
            count,
            active: 0,
            clock: Interval::new(period)?,
        })
    }

    /// Advance by `dt`; returns whether the active index changed.
    pub fn advance(&mut self, dt: f64) -> bool {
        let steps = self.clock.advance(dt) as usize;
        let before = self.active;
        self.active = (self.active + steps) % self.count;
        self.active != before
    }

    /// Currently active index.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Jump to `index` (hover) and restart the period.
    pub fn set_active(&mut self, index: usize) {
        self.active = index % self.count;
        self.clock.reset();
    }
}

/// Whether weekday `day` (0 = Sunday column, 6 = last) is highlighted.
///
/// Monday to Friday light up while the scheduling card is the active one.
pub fn weekday_active(active_card: usize, day: usize) -> bool {
    active_card == SCHEDULER_CARD && (1..=5).contains(&day)
}

#[cfg(test)]
#[path = "../tests/unit/timers.rs"]
mod tests;
