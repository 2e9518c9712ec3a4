//! scroll-reveal is a headless scroll-synchronized animation engine for landing pages.
//!
//! The engine never touches a DOM. A host supplies geometry and scroll position through
//! [`Layout`] and receives interpolated style values through [`StyleSink`]:
//!
//! - Build entrance animations as [`Timeline`]s of [`AnimationStep`]s
//! - Attach them to [`TriggerRegion`]s registered with one shared [`ScrollObserver`]
//! - Feed the observer scroll, resize and frame events via [`ScrollObserver::handle`]
//!
//! The [`Page`] type assembles the two bundled landing-page variants from their
//! [`SectionController`]s.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod host;
pub(crate) mod pin;
pub(crate) mod scroll;
pub(crate) mod section;
pub(crate) mod site;
pub(crate) mod timers;
pub(crate) mod trigger;

pub use crate::foundation::core::{Rect, ScrollDirection, Size, TargetId};
pub use crate::foundation::error::{RevealError, RevealResult};

pub use crate::animation::ease::{Curve, Ease};
pub use crate::animation::step::{AnimationStep, Position, StepBuilder, Tween};
pub use crate::animation::timeline::{
    PlayState, Repeat, ScheduledStep, SharedTimeline, Timeline, TimelineBuilder,
};
pub use crate::animation::value::{AnimValue, Lerp, Property, Rgba};
pub use crate::host::memory::MemoryHost;
pub use crate::host::{Host, Layout, StyleSink};
pub use crate::pin::{PinController, PinCrossing, PinPhase, PinRange, PinUpdate};
pub use crate::scroll::observer::{
    HostEvent, ObserverLease, ObserverOpts, PassReport, ScrollObserver,
};
pub use crate::scroll::state::ScrollState;
pub use crate::section::contact::{ContactForm, LocalAcknowledgment, SubmitHandler};
pub use crate::section::reveal::{RevealGroup, RevealSection, Sequencing};
pub use crate::section::{
    Block, Extent, MountedSection, SectionController, SectionLayout, SectionPlan,
};
pub use crate::site::content::SiteContent;
pub use crate::site::layout::{synthetic_host, synthetic_layout};
pub use crate::site::page::{Action, PageDef, RectDef, StepReport};
pub use crate::site::{Page, Variant};
pub use crate::timers::{FrameDriven, Interval, Rotator, Typewriter, weekday_active};
pub use crate::trigger::boundary::{Anchor, Boundary};
pub use crate::trigger::region::{
    Callback, EventKind, RegionHandle, TriggerEvent, TriggerMode, TriggerRegion,
};
pub use crate::trigger::registry::{RegionStatus, TriggerRegistry};
