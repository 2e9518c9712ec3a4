//! Section controllers.
//!
//! A controller describes one page section: where it sits in the document, and which timelines
//! and trigger regions animate it. [`MountedSection::mount`] registers everything with the
//! page's scroll observer and the returned guard unregisters it again on drop.

use std::fmt;

use crate::{
    animation::timeline::SharedTimeline,
    foundation::{core::TargetId, error::RevealResult},
    host::{Host, StyleSink},
    scroll::observer::{ObserverLease, ScrollObserver},
    timers::FrameDriven,
    trigger::region::{RegionHandle, TriggerRegion},
};

pub(crate) mod about;
pub(crate) mod contact;
pub(crate) mod footer;
pub(crate) mod hero;
pub(crate) mod navbar;
pub(crate) mod protocol;
pub(crate) mod reveal;
pub(crate) mod specialties;
pub(crate) mod testimonials;

/// Nominal height of a section.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum Extent {
    /// Fixed height in px.
    Px(f64),
    /// Multiple of the viewport height.
    Viewports(f64),
}

impl Extent {
    /// Height in px for a viewport of height `viewport_h`.
    pub fn resolve(self, viewport_h: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Viewports(n) => n * viewport_h,
        }
    }
}

/// A direct child of a section, optionally split further into parts.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Block {
    pub id: TargetId,
    pub parts: Vec<TargetId>,
}

impl Block {
    /// Block without parts.
    pub fn leaf(id: TargetId) -> Self {
        Self {
            id,
            parts: Vec::new(),
        }
    }

    /// Block whose extent is shared evenly by `parts`.
    pub fn group(id: TargetId, parts: Vec<TargetId>) -> Self {
        Self { id, parts }
    }
}

/// Geometry a section contributes to the synthetic stacked layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SectionLayout {
    /// Element id of the section itself.
    pub anchor: TargetId,
    pub extent: Extent,
    /// Fixed-position chrome (navbar) that does not take space in the flow.
    pub fixed: bool,
    /// Children, top to bottom.
    pub blocks: Vec<Block>,
}

impl SectionLayout {
    /// In-flow section with the given blocks.
    pub fn flow(anchor: TargetId, extent: Extent, blocks: Vec<Block>) -> Self {
        Self {
            anchor,
            extent,
            fixed: false,
            blocks,
        }
    }
}

/// What a section registers at mount.
#[derive(Default)]
pub struct SectionPlan {
    /// Scroll-driven regions, registered in this order.
    pub regions: Vec<TriggerRegion>,
    /// Timelines that play as soon as the section mounts.
    pub intros: Vec<SharedTimeline>,
    /// Interval timers driven by page frames.
    pub timers: Vec<Box<dyn FrameDriven>>,
}

impl fmt::Debug for SectionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionPlan")
            .field("regions", &self.regions)
            .field("intros", &self.intros.len())
            .field("timers", &self.timers.len())
            .finish()
    }
}

/// One page section's choreography.
pub trait SectionController {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Where the section and its animated children sit.
    fn layout(&self) -> SectionLayout;

    /// Build timelines, regions and timers from static content.
    fn build(&self) -> RevealResult<SectionPlan>;
}

/// A mounted section. Dropping it unregisters its regions and releases its observer lease.
pub struct MountedSection {
    name: String,
    observer: ScrollObserver,
    handles: Vec<RegionHandle>,
    intros: Vec<SharedTimeline>,
    timers: Vec<Box<dyn FrameDriven>>,
    _lease: ObserverLease,
}

impl MountedSection {
    /// Build `section` and register it with `observer`.
    ///
    /// Intro timelines write their initial values and start playing immediately. On error,
    /// whatever was registered so far is unregistered again.
    pub fn mount<H: Host>(
        section: &dyn SectionController,
        observer: &ScrollObserver,
        host: &mut H,
    ) -> RevealResult<Self> {
        let plan = section.build()?;
        let mut mounted = Self {
            name: section.name().to_owned(),
            observer: observer.clone(),
            handles: Vec::with_capacity(plan.regions.len()),
            intros: plan.intros,
            timers: plan.timers,
            _lease: observer.lease(),
        };
        for region in plan.regions {
            let handle = observer.register(region, &*host)?;
            mounted.handles.push(handle);
        }
        for tl in &mounted.intros {
            let mut tl = tl.borrow_mut();
            tl.apply(host);
            tl.play();
        }
        tracing::debug!(
            section = %mounted.name,
            regions = mounted.handles.len(),
            intros = mounted.intros.len(),
            timers = mounted.timers.len(),
            "mounted section"
        );
        Ok(mounted)
    }

    /// Section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handles of the regions this section registered.
    pub fn handles(&self) -> &[RegionHandle] {
        &self.handles
    }

    /// Advance intro timelines and timers. Returns how many of them changed.
    pub fn frame(&mut self, dt: f64, sink: &mut dyn StyleSink) -> usize {
        let mut changed = 0;
        for tl in &self.intros {
            let mut tl = tl.borrow_mut();
            if tl.tick(dt) {
                tl.apply(sink);
                changed += 1;
            }
        }
        for timer in &mut self.timers {
            if timer.frame(dt, sink) {
                changed += 1;
            }
        }
        changed
    }
}

impl fmt::Debug for MountedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedSection")
            .field("name", &self.name)
            .field("handles", &self.handles)
            .finish_non_exhaustive()
    }
}

impl Drop for MountedSection {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            self.observer.unregister(handle);
        }
        tracing::debug!(section = %self.name, "unmounted section");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/mod.rs"]
mod tests;
