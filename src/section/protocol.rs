use crate::{
    animation::{step::AnimationStep, timeline::Timeline, value::Property},
    foundation::{core::TargetId, error::RevealResult},
    section::{
        Block, Extent, SectionController, SectionLayout, SectionPlan,
        reveal::{RevealGroup, children},
    },
    site::content::SiteContent,
    trigger::{boundary::Boundary, region::TriggerRegion},
};

/// Scale a covered card shrinks to while the next one stacks over it.
const STACKED_SCALE: f64 = 0.92;

/// Noir process steps: cards rise in one by one, then the section pins while scrolling
/// stacks each card over the previous one.
#[derive(Clone, Debug)]
pub struct Protocol {
    content: &'static SiteContent,
    anchor: TargetId,
}

impl Protocol {
    pub fn new(content: &'static SiteContent) -> Self {
        Self {
            content,
            anchor: TargetId::new("protocolo"),
        }
    }

    fn cards(&self) -> Vec<TargetId> {
        children(&self.anchor, "card", self.content.process.len())
    }

    fn stage(&self) -> TargetId {
        self.anchor.part("stage")
    }

    /// Scrubbed stacking timeline: one unit of progress per covered card.
    pub fn stacking(&self) -> RevealResult<Option<Timeline>> {
        let cards = self.cards();
        if cards.len() < 2 {
            return Ok(None);
        }
        let mut tl = Timeline::builder("protocol-stack");
        for covered in &cards[..cards.len() - 1] {
            tl = tl.step(
                AnimationStep::builder(covered.clone())
                    .to(Property::Scale, STACKED_SCALE)
                    .to(Property::BackdropBlur, 4.0)
                    .duration(1.0)
                    .ease("none"),
            );
        }
        tl.build().map(Some)
    }
}

impl SectionController for Protocol {
    fn name(&self) -> &str {
        "protocol"
    }

    fn layout(&self) -> SectionLayout {
        SectionLayout::flow(
            self.anchor.clone(),
            Extent::Viewports(2.5),
            vec![Block::group(self.stage(), self.cards())],
        )
    }

    fn build(&self) -> RevealResult<SectionPlan> {
        let mut regions = RevealGroup::new("protocol", self.anchor.clone(), self.cards())
            .from_y(80.0)
            .duration(0.8)
            .individually(0.2)
            .start(85.0)
            .regions()?;
        if let Some(stack) = self.stacking()? {
            regions.push(
                TriggerRegion::pinned(
                    "protocol-pin",
                    Boundary::parse("top top")?,
                    Boundary::parse("bottom bottom")?,
                )
                .trigger(self.anchor.as_str())
                .pin_target(self.stage())
                .animation(stack.shared()),
            );
        }
        Ok(SectionPlan {
            regions,
            ..SectionPlan::default()
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/protocol.rs"]
mod tests;
