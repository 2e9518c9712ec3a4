//! The single shared scroll listener.
//!
//! Sections do not listen to scroll themselves. They take an [`ObserverLease`] on the page's
//! [`ScrollObserver`] and register trigger regions with it; the listener is attached when the
//! first lease is taken and detached, with every remaining region dropped, when the last lease
//! goes away.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    animation::value::Property,
    foundation::error::RevealResult,
    host::{Host, Layout},
    scroll::state::ScrollState,
    trigger::{
        region::{RegionHandle, TriggerEvent, TriggerRegion},
        registry::{Cue, RegionStatus, TriggerRegistry},
    },
};

/// Tunables for the observer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverOpts {
    /// Log a summary line for every evaluation pass at `debug`.
    pub log_passes: bool,
    /// Upper bound for a single frame's `dt` in seconds; long stalls do not skip animations.
    pub max_frame_dt: f64,
}

impl Default for ObserverOpts {
    fn default() -> Self {
        Self {
            log_passes: true,
            max_frame_dt: 0.1,
        }
    }
}

/// Notification from the host environment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// The scroll offset changed.
    Scroll,
    /// The viewport changed size; boundaries are re-resolved.
    Resize,
    /// An animation frame elapsed.
    Frame {
        /// Seconds since the previous frame.
        dt: f64,
    },
}

/// What one call to [`ScrollObserver::handle`] did.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct PassReport {
    /// Sequence number of the evaluation pass (0 for frames and ignored events).
    pub pass: u64,
    /// Scroll snapshot the pass evaluated against.
    pub scroll: Option<ScrollState>,
    /// Crossings observed, in region registration order.
    pub events: Vec<TriggerEvent>,
    /// Timelines whose playhead moved during a frame.
    pub advanced: usize,
    /// The observer was detached and did nothing.
    pub ignored: bool,
}

struct ObserverInner {
    opts: ObserverOpts,
    registry: TriggerRegistry,
    leases: usize,
    last_scroll: Option<f64>,
    passes: u64,
}

/// Shared handle to the page's scroll listener. Clones refer to the same listener.
#[derive(Clone)]
pub struct ScrollObserver {
    inner: Rc<RefCell<ObserverInner>>,
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self::new(ObserverOpts::default())
    }
}

impl fmt::Debug for ScrollObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ScrollObserver")
            .field("leases", &inner.leases)
            .field("regions", &inner.registry.len())
            .field("passes", &inner.passes)
            .finish()
    }
}

impl ScrollObserver {
    /// Detached observer with no regions.
    pub fn new(opts: ObserverOpts) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObserverInner {
                opts,
                registry: TriggerRegistry::new(),
                leases: 0,
                last_scroll: None,
                passes: 0,
            })),
        }
    }

    /// Current options.
    pub fn opts(&self) -> ObserverOpts {
        self.inner.borrow().opts.clone()
    }

    /// Take a lease; the first one attaches the listener.
    pub fn lease(&self) -> ObserverLease {
        let mut inner = self.inner.borrow_mut();
        inner.leases += 1;
        if inner.leases == 1 {
            inner.last_scroll = None;
            tracing::debug!("scroll listener attached");
        }
        ObserverLease {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Whether at least one lease is alive.
    pub fn is_attached(&self) -> bool {
        self.inner.borrow().leases > 0
    }

    /// Number of live leases.
    pub fn lease_count(&self) -> usize {
        self.inner.borrow().leases
    }

    /// Number of live regions.
    pub fn region_count(&self) -> usize {
        self.inner.borrow().registry.len()
    }

    /// Evaluation passes run so far.
    pub fn passes(&self) -> u64 {
        self.inner.borrow().passes
    }

    /// Register a region. Pinned ranges are checked against `layout`.
    pub fn register(
        &self,
        region: TriggerRegion,
        layout: &dyn Layout,
    ) -> RevealResult<RegionHandle> {
        self.inner.borrow_mut().registry.register_in(region, layout)
    }

    /// Unregister a region. Takes effect immediately, including inside a running pass.
    pub fn unregister(&self, handle: RegionHandle) -> bool {
        let removed = self.inner.borrow_mut().registry.remove(handle);
        // Dropped outside the borrow: a callback's captures may reach back into the observer.
        removed.is_some()
    }

    /// State of a region, if still registered.
    pub fn status(&self, handle: RegionHandle) -> Option<RegionStatus> {
        self.inner.borrow().registry.status(handle)
    }

    /// Dispatch a host notification.
    pub fn handle<H: Host>(&self, event: HostEvent, host: &mut H) -> RevealResult<PassReport> {
        if !self.is_attached() {
            tracing::trace!(?event, "observer detached; event ignored");
            return Ok(PassReport {
                ignored: true,
                ..PassReport::default()
            });
        }
        match event {
            HostEvent::Scroll | HostEvent::Resize => self.evaluate(host),
            HostEvent::Frame { dt } => Ok(PassReport {
                advanced: self.tick(dt, host),
                ..PassReport::default()
            }),
        }
    }

    /// Run one evaluation pass over every live region in registration order.
    ///
    /// Callbacks run with the registry unborrowed, so they may register or unregister regions.
    /// A region unregistered during the pass gets no further callbacks; regions registered
    /// during the pass are first evaluated by the next pass.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn evaluate<H: Host>(&self, host: &mut H) -> RevealResult<PassReport> {
        let (handles, scroll, pass, log_passes) = {
            let mut inner = self.inner.borrow_mut();
            let scroll = ScrollState::read(&*host, inner.last_scroll);
            inner.last_scroll = Some(scroll.offset);
            inner.passes += 1;
            (
                inner.registry.handles(),
                scroll,
                inner.passes,
                inner.opts.log_passes,
            )
        };

        let mut report = PassReport {
            pass,
            scroll: Some(scroll),
            ..PassReport::default()
        };

        for handle in handles {
            let firing = self
                .inner
                .borrow_mut()
                .registry
                .evaluate(handle, scroll.offset, &*host)?;
            let Some(firing) = firing else {
                continue;
            };

            if let Some(tl) = &firing.animation {
                let mut tl = tl.borrow_mut();
                match firing.cue {
                    Some(Cue::Play) => tl.play(),
                    Some(Cue::Reverse) => tl.reverse(),
                    Some(Cue::Scrub(p)) => {
                        tl.scrub(p);
                        tl.apply(host);
                    }
                    None => {}
                }
                if firing.prime {
                    tl.apply(host);
                }
            }
            if let Some((target, offset)) = &firing.pin {
                host.apply(target, &Property::PinOffset, (*offset).into());
            }

            for event in firing.events {
                if !self.inner.borrow().registry.contains(handle) {
                    break;
                }
                self.invoke(handle, &event);
                report.events.push(event);
            }
        }

        if log_passes {
            tracing::debug!(
                pass,
                scroll = scroll.offset,
                direction = ?scroll.direction,
                events = report.events.len(),
                "evaluation pass"
            );
        }
        Ok(report)
    }

    fn invoke(&self, handle: RegionHandle, event: &TriggerEvent) {
        let callback = self
            .inner
            .borrow_mut()
            .registry
            .take_callback(handle, event.kind);
        let Some(mut callback) = callback else {
            return;
        };
        callback(event);
        let orphan = self
            .inner
            .borrow_mut()
            .registry
            .restore_callback(handle, event.kind, callback);
        drop(orphan);
    }

    /// Advance every timeline owned by a live region by `dt` and write the new values.
    ///
    /// Returns how many timelines moved.
    pub fn tick<H: Host>(&self, dt: f64, host: &mut H) -> usize {
        let (timelines, max_dt) = {
            let inner = self.inner.borrow();
            (inner.registry.timelines(), inner.opts.max_frame_dt)
        };
        let dt = dt.min(max_dt);
        let mut advanced = 0;
        for tl in timelines {
            let mut tl = tl.borrow_mut();
            if tl.tick(dt) {
                tl.apply(host);
                advanced += 1;
            }
        }
        advanced
    }
}

/// Keeps the shared listener attached while alive.
pub struct ObserverLease {
    inner: Rc<RefCell<ObserverInner>>,
}

impl ObserverLease {
    /// Observer this lease belongs to.
    pub fn observer(&self) -> ScrollObserver {
        ScrollObserver {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for ObserverLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverLease").finish_non_exhaustive()
    }
}

impl Drop for ObserverLease {
    fn drop(&mut self) {
        let drained = {
            let mut inner = self.inner.borrow_mut();
            inner.leases = inner.leases.saturating_sub(1);
            if inner.leases > 0 {
                return;
            }
            inner.last_scroll = None;
            inner.registry.drain()
        };
        tracing::debug!(dropped = drained.len(), "scroll listener detached");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/observer.rs"]
mod tests;
