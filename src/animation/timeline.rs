use std::{
    cell::RefCell,
    collections::{BTreeMap, btree_map::Entry},
    rc::Rc,
};

use crate::{
    animation::{
        step::{AnimationStep, Position, StepBuilder},
        value::{AnimValue, Lerp, Property},
    },
    foundation::{
        core::TargetId,
        error::{RevealError, RevealResult},
    },
    host::StyleSink,
};

/// Timeline shared between the section that owns it and the trigger region that drives it.
pub type SharedTimeline = Rc<RefCell<Timeline>>;

/// Playback state of a [`Timeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum PlayState {
    /// Not advancing; playhead at 0 or parked by a scrub.
    Idle,
    /// Advancing forward with frame time.
    Playing,
    /// Running back toward 0 with frame time.
    Reversing,
    /// Reached the end of its last iteration.
    Completed,
}

/// How many extra iterations a timeline runs after the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Run `n` extra iterations.
    Count(u32),
    /// Never complete.
    Infinite,
    /// Play once.
    #[default]
    Once,
}

/// A step placed at an absolute start time.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledStep {
    step: AnimationStep,
    start: f64,
}

impl ScheduledStep {
    /// The underlying immutable step.
    pub fn step(&self) -> &AnimationStep {
        &self.step
    }

    /// Absolute start in seconds.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Absolute end in seconds.
    pub fn end(&self) -> f64 {
        self.start + self.step.duration()
    }
}

/// Ordered, positioned sequence of animation steps with play/reverse/scrub control.
#[derive(Clone, Debug)]
pub struct Timeline {
    label: String,
    steps: Vec<ScheduledStep>,
    duration: f64,
    delay: f64,
    repeat: Repeat,
    yoyo: bool,

    playhead: f64,
    delay_left: f64,
    iteration: u32,
    forward_leg: bool,
    state: PlayState,
}

impl Timeline {
    /// Schedule `steps` in order into a new timeline.
    pub fn build(steps: impl IntoIterator<Item = AnimationStep>) -> RevealResult<Self> {
        let mut b = TimelineBuilder::new("timeline");
        for s in steps {
            b = b.push(s);
        }
        b.build()
    }

    /// Start building a labelled timeline.
    pub fn builder(label: impl Into<String>) -> TimelineBuilder {
        TimelineBuilder::new(label)
    }

    /// Wrap into the shared handle the trigger registry expects.
    pub fn shared(self) -> SharedTimeline {
        Rc::new(RefCell::new(self))
    }

    /// Human-readable label, used in logs and reports.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Scheduled steps in declaration order.
    pub fn steps(&self) -> &[ScheduledStep] {
        &self.steps
    }

    /// Length of one iteration in seconds (end of the latest step).
    pub fn total_duration(&self) -> f64 {
        self.duration
    }

    /// Start delay in seconds.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Current playback state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Current playhead in seconds within the current iteration.
    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    /// Playhead as a fraction of one iteration.
    pub fn progress(&self) -> f64 {
        (self.playhead / self.duration).clamp(0.0, 1.0)
    }

    /// Begin (or resume) forward playback.
    ///
    /// No-op while already playing or once completed. A timeline that was reversing turns
    /// around immediately, without replaying its delay.
    pub fn play(&mut self) {
        match self.state {
            PlayState::Playing | PlayState::Completed => {}
            PlayState::Reversing => self.state = PlayState::Playing,
            PlayState::Idle => {
                if self.playhead <= 0.0 && self.iteration == 0 {
                    self.delay_left = self.delay;
                }
                self.state = PlayState::Playing;
            }
        }
    }

    /// Run the playhead back toward 0; reaching 0 returns the timeline to [`PlayState::Idle`].
    pub fn reverse(&mut self) {
        if self.playhead <= 0.0 {
            self.delay_left = 0.0;
            self.state = PlayState::Idle;
            return;
        }
        self.delay_left = 0.0;
        self.state = PlayState::Reversing;
    }

    /// Set the playhead from scroll progress, bypassing time entirely.
    ///
    /// Scrubbed timelines are parked (never advanced by [`Self::tick`]) so the playhead stays a
    /// pure function of `progress`.
    pub fn scrub(&mut self, progress: f64) {
        let p = progress.clamp(0.0, 1.0);
        self.playhead = p * self.duration;
        self.delay_left = 0.0;
        self.iteration = 0;
        self.forward_leg = true;
        self.state = if p >= 1.0 {
            PlayState::Completed
        } else {
            PlayState::Idle
        };
    }

    /// Advance by `dt` seconds of frame time. Returns `true` when the playhead moved.
    pub fn tick(&mut self, dt: f64) -> bool {
        if dt <= 0.0 {
            return false;
        }
        match self.state {
            PlayState::Idle | PlayState::Completed => false,
            PlayState::Reversing => {
                self.playhead = (self.playhead - dt).max(0.0);
                if self.playhead <= 0.0 {
                    self.iteration = 0;
                    self.forward_leg = true;
                    self.state = PlayState::Idle;
                }
                true
            }
            PlayState::Playing => {
                let mut dt = dt;
                if self.delay_left > 0.0 {
                    let used = self.delay_left.min(dt);
                    self.delay_left -= used;
                    dt -= used;
                    if dt <= 0.0 {
                        return false;
                    }
                }
                self.advance(dt);
                true
            }
        }
    }

    fn repeats_left(&self) -> bool {
        match self.repeat {
            Repeat::Once => false,
            Repeat::Infinite => true,
            Repeat::Count(n) => self.iteration < n,
        }
    }

    fn advance(&mut self, dt: f64) {
        if self.forward_leg {
            self.playhead += dt;
            if self.playhead < self.duration {
                return;
            }
            let overflow = (self.playhead - self.duration).min(self.duration);
            if !self.repeats_left() {
                self.playhead = self.duration;
                self.state = PlayState::Completed;
                return;
            }
            self.iteration += 1;
            if self.yoyo {
                self.forward_leg = false;
                self.playhead = self.duration - overflow;
            } else {
                self.playhead = overflow;
            }
        } else {
            self.playhead -= dt;
            if self.playhead > 0.0 {
                return;
            }
            let overflow = (-self.playhead).min(self.duration);
            if !self.repeats_left() {
                self.playhead = 0.0;
                self.state = PlayState::Completed;
                return;
            }
            self.iteration += 1;
            self.forward_leg = true;
            self.playhead = overflow;
        }
    }

    /// Eased value of every animated (target, property) pair at the current playhead.
    ///
    /// A step that has not started yet contributes its `from` value, unless an earlier step on
    /// the same pair has already started; started steps override earlier ones.
    pub fn sample(&self) -> Vec<(TargetId, Property, AnimValue)> {
        let mut out: BTreeMap<(&TargetId, &Property), (bool, AnimValue)> = BTreeMap::new();
        for s in &self.steps {
            let started = self.playhead >= s.start;
            let local = ((self.playhead - s.start) / s.step.duration()).clamp(0.0, 1.0);
            let eased = s.step.ease().apply(local);
            for tw in s.step.tweens() {
                let v = AnimValue::lerp(&tw.from, &tw.to, eased);
                match out.entry((s.step.target(), &tw.property)) {
                    Entry::Vacant(e) => {
                        e.insert((started, v));
                    }
                    Entry::Occupied(mut e) => {
                        if started {
                            e.insert((true, v));
                        }
                    }
                }
            }
        }
        out.into_iter()
            .map(|((t, p), (_, v))| (t.clone(), p.clone(), v))
            .collect()
    }

    /// Value of one (target, property) pair at the current playhead.
    pub fn value_of(&self, target: &TargetId, property: &Property) -> Option<AnimValue> {
        self.sample()
            .into_iter()
            .find(|(t, p, _)| t == target && p == property)
            .map(|(_, _, v)| v)
    }

    /// Write the current values to `sink`.
    pub fn apply(&self, sink: &mut dyn StyleSink) {
        for (target, property, value) in self.sample() {
            sink.apply(&target, &property, value);
        }
    }
}

/// Builder for [`Timeline`]. Step errors are deferred to [`TimelineBuilder::build`] so the
/// builder chains like the choreography it describes.
#[derive(Debug)]
pub struct TimelineBuilder {
    label: String,
    delay: f64,
    repeat: Repeat,
    yoyo: bool,
    steps: Vec<AnimationStep>,
    error: Option<RevealError>,
}

impl TimelineBuilder {
    /// Empty builder.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            delay: 0.0,
            repeat: Repeat::Once,
            yoyo: false,
            steps: Vec::new(),
            error: None,
        }
    }

    /// Seconds to wait before the first forward play advances.
    pub fn delay(mut self, secs: f64) -> Self {
        self.delay = secs;
        self
    }

    /// Extra iterations after the first.
    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Alternate direction on every repeat.
    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Append an already-built step.
    pub fn push(mut self, step: AnimationStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Build and append a step.
    pub fn step(mut self, step: StepBuilder) -> Self {
        match step.build() {
            Ok(s) => self.steps.push(s),
            Err(e) => self.fail(e),
        }
        self
    }

    /// Append one copy of `template` per target, each starting `each` seconds after the
    /// previous. The first copy keeps the template's own position.
    pub fn stagger(
        mut self,
        targets: impl IntoIterator<Item = TargetId>,
        each: f64,
        template: StepBuilder,
    ) -> Self {
        if !(each.is_finite() && each >= 0.0) {
            self.fail(RevealError::configuration(format!(
                "stagger interval must be >= 0, got {each}"
            )));
            return self;
        }
        let template = match template.build() {
            Ok(t) => t,
            Err(e) => {
                self.fail(e);
                return self;
            }
        };
        for (i, target) in targets.into_iter().enumerate() {
            let position = if i == 0 {
                template.position()
            } else {
                Position::WithPrevious(each)
            };
            self.steps
                .push(template.with_target_and_position(target, position));
        }
        self
    }

    fn fail(&mut self, e: RevealError) {
        if self.error.is_none() {
            self.error = Some(e);
        }
    }

    /// Resolve every step's start time and freeze the timeline.
    pub fn build(self) -> RevealResult<Timeline> {
        if let Some(e) = self.error {
            return Err(e);
        }
        let label = self.label;
        if self.steps.is_empty() {
            return Err(RevealError::configuration(format!(
                "timeline '{label}' has no steps"
            )));
        }
        if !(self.delay.is_finite() && self.delay >= 0.0) {
            return Err(RevealError::configuration(format!(
                "timeline '{label}' delay must be >= 0"
            )));
        }

        let mut end = 0.0f64;
        let mut prev_start = 0.0f64;
        let mut steps = Vec::with_capacity(self.steps.len());
        for step in self.steps {
            let start = step.position().resolve(end, prev_start);
            if start < -1e-9 {
                return Err(RevealError::configuration(format!(
                    "step for '{}' in timeline '{label}' starts before 0 ({start:.3}s)",
                    step.target()
                )));
            }
            let start = start.max(0.0);
            end = end.max(start + step.duration());
            prev_start = start;
            steps.push(ScheduledStep { step, start });
        }

        Ok(Timeline {
            label,
            steps,
            duration: end,
            delay: self.delay,
            repeat: self.repeat,
            yoyo: self.yoyo,
            playhead: 0.0,
            delay_left: 0.0,
            iteration: 0,
            forward_leg: true,
            state: PlayState::Idle,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
