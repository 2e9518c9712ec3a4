use std::collections::BTreeMap;

use crate::{
    animation::timeline::SharedTimeline,
    foundation::{
        core::{Rect, Size, TargetId},
        error::{RevealError, RevealResult},
    },
    host::Layout,
    pin::{PinController, PinCrossing, PinPhase, PinRange},
    trigger::region::{
        Callback, EventKind, RegionHandle, TriggerEvent, TriggerMode, TriggerRegion,
    },
};

/// Observable state of a registered region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionStatus {
    /// One-shot region waiting for its start boundary.
    Armed,
    /// One-shot region that already fired.
    Fired,
    /// Toggle region with scroll before its start.
    Below,
    /// Toggle region with scroll at or past its start.
    Above,
    /// Pinned region and its current phase.
    Pinned(PinPhase),
    /// Trigger element missing from the layout; the region never fires.
    Unresolved,
}

#[derive(Debug)]
enum SlotState {
    Armed,
    Fired,
    Below,
    Above,
    Pinned {
        controller: Option<PinController>,
        last_progress: Option<f64>,
    },
    Unresolved,
}

impl SlotState {
    fn initial(mode: TriggerMode) -> Self {
        match mode {
            TriggerMode::OneShot => Self::Armed,
            TriggerMode::Toggle => Self::Below,
            TriggerMode::PinnedScrub => Self::Pinned {
                controller: None,
                last_progress: None,
            },
        }
    }

    fn status(&self) -> RegionStatus {
        match self {
            Self::Armed => RegionStatus::Armed,
            Self::Fired => RegionStatus::Fired,
            Self::Below => RegionStatus::Below,
            Self::Above => RegionStatus::Above,
            Self::Pinned { controller, .. } => RegionStatus::Pinned(
                controller
                    .as_ref()
                    .map(PinController::phase)
                    .unwrap_or_default(),
            ),
            Self::Unresolved => RegionStatus::Unresolved,
        }
    }
}

#[derive(Debug)]
struct Slot {
    region: TriggerRegion,
    state: SlotState,
    primed: bool,
}

/// What the driving animation should do as a result of a region's evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Cue {
    Play,
    Reverse,
    Scrub(f64),
}

/// Outcome of evaluating one region against one scroll offset.
#[derive(Debug, Default)]
pub(crate) struct Firing {
    /// Boundary crossings and scrub updates, in crossing order.
    pub events: Vec<TriggerEvent>,
    pub animation: Option<SharedTimeline>,
    pub cue: Option<Cue>,
    /// First evaluation: the animation's resting state should be written once.
    pub prime: bool,
    /// Element and translation for pinned regions.
    pub pin: Option<(TargetId, f64)>,
}

impl Firing {
    fn is_empty(&self) -> bool {
        self.events.is_empty() && self.cue.is_none() && !self.prime && self.pin.is_none()
    }
}

/// Ordered collection of live trigger regions.
///
/// Handles increase monotonically and are never reused, so iteration order is registration
/// order and a stale handle can never address a newer region.
#[derive(Debug, Default)]
pub struct TriggerRegistry {
    next: u64,
    slots: BTreeMap<u64, Slot>,
}

impl TriggerRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region after static validation.
    pub fn register(&mut self, region: TriggerRegion) -> RevealResult<RegionHandle> {
        region.validate()?;
        let handle = RegionHandle(self.next);
        self.next += 1;
        tracing::debug!(
            region = %handle,
            label = region.label(),
            mode = ?region.mode(),
            "registered trigger region"
        );
        let state = SlotState::initial(region.mode());
        self.slots.insert(
            handle.0,
            Slot {
                region,
                state,
                primed: false,
            },
        );
        Ok(handle)
    }

    /// Add a region, also rejecting pin ranges that resolve degenerate against `layout`.
    ///
    /// A missing trigger element is not an error here; the region is parked at evaluation.
    pub fn register_in(
        &mut self,
        region: TriggerRegion,
        layout: &dyn Layout,
    ) -> RevealResult<RegionHandle> {
        region.validate()?;
        if region.mode() == TriggerMode::PinnedScrub {
            match resolve_pin(&region, layout) {
                Ok(_) => {}
                Err(RevealError::MissingTarget(_)) => {}
                Err(e) => return Err(e),
            }
        }
        self.register(region)
    }

    /// Remove a region; later passes never see it again. Returns whether it was live.
    pub fn unregister(&mut self, handle: RegionHandle) -> bool {
        self.remove(handle).is_some()
    }

    /// Remove a region and hand it back so its callbacks can be dropped by the caller.
    pub fn remove(&mut self, handle: RegionHandle) -> Option<TriggerRegion> {
        let slot = self.slots.remove(&handle.0)?;
        tracing::debug!(
            region = %handle,
            label = slot.region.label(),
            "unregistered trigger region"
        );
        Some(slot.region)
    }

    /// Remove every region.
    pub fn drain(&mut self) -> Vec<TriggerRegion> {
        std::mem::take(&mut self.slots)
            .into_values()
            .map(|s| s.region)
            .collect()
    }

    /// Whether `handle` is still registered.
    pub fn contains(&self, handle: RegionHandle) -> bool {
        self.slots.contains_key(&handle.0)
    }

    /// Number of live regions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no region is registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Live handles in registration order.
    pub fn handles(&self) -> Vec<RegionHandle> {
        self.slots.keys().copied().map(RegionHandle).collect()
    }

    /// Registered region for `handle`.
    pub fn region(&self, handle: RegionHandle) -> Option<&TriggerRegion> {
        self.slots.get(&handle.0).map(|s| &s.region)
    }

    /// Current state of `handle`.
    pub fn status(&self, handle: RegionHandle) -> Option<RegionStatus> {
        self.slots.get(&handle.0).map(|s| s.state.status())
    }

    /// Distinct timelines driven by live regions, in registration order.
    pub fn timelines(&self) -> Vec<SharedTimeline> {
        let mut out: Vec<SharedTimeline> = Vec::new();
        for tl in self.slots.values().filter_map(|s| s.region.timeline()) {
            if !out.iter().any(|seen| std::rc::Rc::ptr_eq(seen, tl)) {
                out.push(tl.clone());
            }
        }
        out
    }

    /// Take the callback matching `kind` out of its slot so it can run without a borrow.
    pub(crate) fn take_callback(
        &mut self,
        handle: RegionHandle,
        kind: EventKind,
    ) -> Option<Callback> {
        let slot = self.slots.get_mut(&handle.0)?;
        match kind {
            EventKind::Enter => slot.region.on_enter.take(),
            EventKind::LeaveBack => slot.region.on_leave_back.take(),
            _ => None,
        }
    }

    /// Put a callback back. If the region went away meanwhile, the callback is returned.
    pub(crate) fn restore_callback(
        &mut self,
        handle: RegionHandle,
        kind: EventKind,
        callback: Callback,
    ) -> Option<Callback> {
        let Some(slot) = self.slots.get_mut(&handle.0) else {
            return Some(callback);
        };
        let place = match kind {
            EventKind::Enter => &mut slot.region.on_enter,
            EventKind::LeaveBack => &mut slot.region.on_leave_back,
            _ => return Some(callback),
        };
        if place.is_none() {
            *place = Some(callback);
            None
        } else {
            Some(callback)
        }
    }

    /// Evaluate one region against `scroll` and advance its state.
    ///
    /// Returns `Ok(None)` when there is nothing to do for the region.
    pub(crate) fn evaluate(
        &mut self,
        handle: RegionHandle,
        scroll: f64,
        layout: &dyn Layout,
    ) -> RevealResult<Option<Firing>> {
        let Some(slot) = self.slots.get_mut(&handle.0) else {
            return Ok(None);
        };
        let label = slot.region.label().to_owned();
        let event = |kind: EventKind| TriggerEvent {
            region: handle,
            label: label.clone(),
            kind,
            scroll,
        };

        let mut firing = Firing {
            animation: slot.region.timeline().cloned(),
            prime: !slot.primed && slot.region.mode() != TriggerMode::PinnedScrub,
            ..Firing::default()
        };
        slot.primed = true;

        match &mut slot.state {
            SlotState::Unresolved | SlotState::Fired => {}
            SlotState::Armed => {
                if let Some(start) = resolve_start(&slot.region, layout, handle)? {
                    if scroll > start {
                        mark_fired(&mut slot.state, &label)?;
                        firing.events.push(event(EventKind::Enter));
                        firing.cue = Some(Cue::Play);
                    }
                } else {
                    slot.state = SlotState::Unresolved;
                }
            }
            SlotState::Below | SlotState::Above => {
                if let Some(start) = resolve_start(&slot.region, layout, handle)? {
                    let above = scroll > start;
                    match (&slot.state, above) {
                        (SlotState::Below, true) => {
                            slot.state = SlotState::Above;
                            firing.events.push(event(EventKind::Enter));
                            firing.cue = Some(Cue::Play);
                        }
                        (SlotState::Above, false) => {
                            slot.state = SlotState::Below;
                            firing.events.push(event(EventKind::LeaveBack));
                            firing.cue = Some(Cue::Reverse);
                        }
                        _ => {}
                    }
                } else {
                    slot.state = SlotState::Unresolved;
                }
            }
            SlotState::Pinned {
                controller,
                last_progress,
            } => match resolve_pin(&slot.region, layout) {
                Ok(range) => {
                    let ctrl = controller.get_or_insert_with(|| PinController::new(range));
                    ctrl.set_range(range);
                    let update = ctrl.update(scroll);
                    firing
                        .events
                        .extend(update.crossings.iter().map(|c| event(crossing_kind(*c))));
                    if *last_progress != Some(update.progress) {
                        *last_progress = Some(update.progress);
                        firing.events.push(event(EventKind::Scrub {
                            progress: update.progress,
                        }));
                        firing.cue = Some(Cue::Scrub(update.progress));
                    }
                    firing.pin = slot
                        .region
                        .pinned_element()
                        .map(|target| (target, update.offset));
                }
                Err(RevealError::MissingTarget(_)) => {
                    warn_missing(&slot.region, handle);
                    slot.state = SlotState::Unresolved;
                }
                Err(e) => {
                    // A resize can shrink a valid range to nothing; keep the last state.
                    tracing::warn!(
                        region = %handle,
                        label = %label,
                        error = %e,
                        "skipping degenerate pin range"
                    );
                }
            },
        }

        // Unresolved content stays at rest instead of being hidden by initial values.
        if matches!(slot.state, SlotState::Unresolved) {
            firing.prime = false;
        }
        Ok((!firing.is_empty()).then_some(firing))
    }
}

fn crossing_kind(c: PinCrossing) -> EventKind {
    match c {
        PinCrossing::Enter => EventKind::Enter,
        PinCrossing::Leave => EventKind::Leave,
        PinCrossing::EnterBack => EventKind::EnterBack,
        PinCrossing::LeaveBack => EventKind::LeaveBack,
    }
}

/// Transition a one-shot region to fired. Firing twice is a bug in the state machine.
fn mark_fired(state: &mut SlotState, label: &str) -> RevealResult<()> {
    if matches!(state, SlotState::Fired) {
        debug_assert!(false, "one-shot region '{label}' fired twice");
        tracing::error!(label, "one-shot region fired twice");
        return Err(RevealError::invariant(format!(
            "one-shot region '{label}' fired twice"
        )));
    }
    *state = SlotState::Fired;
    Ok(())
}

fn trigger_rect(region: &TriggerRegion, layout: &dyn Layout) -> Option<Rect> {
    region.trigger_id().and_then(|id| layout.element_bounds(id))
}

fn warn_missing(region: &TriggerRegion, handle: RegionHandle) {
    tracing::warn!(
        region = %handle,
        label = region.label(),
        trigger = region.trigger_id().unwrap_or_default(),
        "trigger element not found; region will never fire"
    );
}

/// `Ok(None)` parks the region: its trigger element is missing.
fn resolve_start(
    region: &TriggerRegion,
    layout: &dyn Layout,
    handle: RegionHandle,
) -> RevealResult<Option<f64>> {
    let viewport: Size = layout.viewport();
    match region
        .start()
        .resolve(trigger_rect(region, layout), viewport, None)
    {
        Ok(y) => Ok(Some(y)),
        Err(RevealError::MissingTarget(_)) => {
            warn_missing(region, handle);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn resolve_pin(region: &TriggerRegion, layout: &dyn Layout) -> RevealResult<PinRange> {
    let rect = trigger_rect(region, layout);
    let viewport = layout.viewport();
    let start = region.start().resolve(rect, viewport, None)?;
    let end = region
        .end()
        .ok_or_else(|| RevealError::configuration("pinned region without an end boundary"))?
        .resolve(rect, viewport, Some(start))?;
    PinRange::new(start, end)
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/registry.rs"]
mod tests;
