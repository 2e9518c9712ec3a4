use crate::{
    animation::{step::AnimationStep, timeline::Timeline, value::Property},
    foundation::{core::TargetId, error::RevealResult},
    section::{Block, Extent, SectionController, SectionLayout, SectionPlan},
    site::Variant,
    trigger::{boundary::Boundary, region::TriggerRegion},
};

/// Scroll offset past which the Clinic footer offers a back-to-top button.
pub const BACK_TO_TOP_AFTER: f64 = 600.0;

/// Page footer. Clinic shows a back-to-top button once the visitor has scrolled a while;
/// Noir's footer is static.
#[derive(Clone, Debug)]
pub struct Footer {
    variant: Variant,
    anchor: TargetId,
}

impl Footer {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            anchor: TargetId::new("footer"),
        }
    }

    fn top_button(&self) -> TargetId {
        self.anchor.part("top-button")
    }
}

impl SectionController for Footer {
    fn name(&self) -> &str {
        "footer"
    }

    fn layout(&self) -> SectionLayout {
        let mut blocks = vec![Block::leaf(self.anchor.part("columns"))];
        if self.variant == Variant::Clinic {
            blocks.push(Block::leaf(self.top_button()));
        }
        SectionLayout::flow(self.anchor.clone(), Extent::Px(420.0), blocks)
    }

    fn build(&self) -> RevealResult<SectionPlan> {
        if self.variant == Variant::Noir {
            return Ok(SectionPlan::default());
        }
        let show = Timeline::builder("back-to-top")
            .step(
                AnimationStep::builder(self.top_button())
                    .fade_in()
                    .from(Property::Scale, 0.8)
                    .duration(0.2),
            )
            .build()?;
        Ok(SectionPlan {
            regions: vec![
                TriggerRegion::toggle("back-to-top", Boundary::Scroll(BACK_TO_TOP_AFTER))
                    .animation(show.shared()),
            ],
            ..SectionPlan::default()
        })
    }
}
