use crate::{
    animation::{
        step::AnimationStep,
        timeline::Timeline,
        value::{Property, Rgba},
    },
    foundation::{core::TargetId, error::RevealResult},
    section::{Extent, SectionController, SectionLayout, SectionPlan},
    site::Variant,
    trigger::{boundary::Boundary, region::TriggerRegion},
};

/// Fixed navigation bar that turns solid once the page scrolls past a threshold.
///
/// The transition plays forward on every crossing and reverses on every crossing back.
#[derive(Clone, Debug)]
pub struct Navbar {
    variant: Variant,
    anchor: TargetId,
}

impl Navbar {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            anchor: TargetId::new("navbar"),
        }
    }

    /// Scroll offset at which the bar turns solid.
    pub fn threshold(&self) -> f64 {
        match self.variant {
            Variant::Clinic => 80.0,
            Variant::Noir => 50.0,
        }
    }

    fn transition(&self) -> RevealResult<Timeline> {
        let step = AnimationStep::builder(self.anchor.clone());
        let step = match self.variant {
            Variant::Clinic => step
                .tween(
                    Property::BackgroundColor,
                    Rgba::transparent(),
                    Rgba::parse("rgba(250,250,249,0.96)")?,
                )
                .tween(
                    Property::BorderColor,
                    Rgba::transparent(),
                    Rgba::parse("#e7e5e4")?,
                )
                .tween(Property::BackdropBlur, 0.0, 12.0)
                .duration(0.4)
                .ease("power2.out"),
            // Glass pill: translucent slate, tighter padding.
            Variant::Noir => step
                .tween(
                    Property::BackgroundColor,
                    Rgba::transparent(),
                    Rgba::parse("rgba(42,42,53,0.6)")?,
                )
                .tween(Property::BackdropBlur, 0.0, 16.0)
                .tween(Property::PaddingY, 24.0, 12.0)
                .duration(0.5)
                .ease("cubic-bezier(0.4,0,0.2,1)"),
        };
        Timeline::builder("navbar").step(step).build()
    }
}

impl SectionController for Navbar {
    fn name(&self) -> &str {
        "navbar"
    }

    fn layout(&self) -> SectionLayout {
        SectionLayout {
            anchor: self.anchor.clone(),
            extent: Extent::Px(64.0),
            fixed: true,
            blocks: Vec::new(),
        }
    }

    fn build(&self) -> RevealResult<SectionPlan> {
        let threshold = self.threshold();
        let region = TriggerRegion::toggle("navbar", Boundary::Scroll(threshold))
            .animation(self.transition()?.shared())
            .on_enter(move |e| tracing::trace!(scroll = e.scroll, threshold, "navbar solid"))
            .on_leave_back(move |e| {
                tracing::trace!(scroll = e.scroll, threshold, "navbar transparent")
            });
        Ok(SectionPlan {
            regions: vec![region],
            ..SectionPlan::default()
        })
    }
}
