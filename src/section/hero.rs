use crate::{
    animation::{
        step::AnimationStep,
        timeline::{Repeat, Timeline},
        value::Property,
    },
    foundation::{core::TargetId, error::RevealResult},
    section::{Block, Extent, SectionController, SectionLayout, SectionPlan, reveal::children},
    site::{Variant, content::SiteContent},
};

/// Full-screen opening banner. Its entrance plays at mount, not on scroll.
#[derive(Clone, Debug)]
pub struct Hero {
    content: &'static SiteContent,
    anchor: TargetId,
}

impl Hero {
    pub fn new(content: &'static SiteContent) -> Self {
        let anchor = match content.variant {
            Variant::Clinic => TargetId::new("inicio"),
            Variant::Noir => TargetId::new("hero"),
        };
        Self { content, anchor }
    }

    fn title(&self) -> TargetId {
        self.anchor.part("title")
    }

    fn lines(&self) -> Vec<TargetId> {
        children(&self.title(), "line", self.content.hero_lines.len())
    }

    fn subtitle(&self) -> TargetId {
        self.anchor.part("subtitle")
    }

    fn cta(&self) -> TargetId {
        self.anchor.part("cta")
    }

    fn actions(&self) -> Vec<TargetId> {
        children(&self.cta(), "action", self.content.hero_actions.len())
    }

    fn cue(&self) -> TargetId {
        self.anchor.part("scroll-cue")
    }

    /// The entrance timeline.
    pub fn intro(&self) -> RevealResult<Timeline> {
        let rise = |target: TargetId, y: f64, secs: f64, ease: &str| {
            AnimationStep::builder(target)
                .fade_in()
                .from(Property::TranslateY, y)
                .duration(secs)
                .ease(ease)
        };
        let first = |targets: &[TargetId]| {
            targets
                .first()
                .cloned()
                .unwrap_or_else(|| self.anchor.clone())
        };

        let lines = self.lines();
        match self.content.variant {
            Variant::Clinic => Timeline::builder("hero")
                .delay(0.2)
                .stagger(lines.clone(), 0.1, rise(first(&lines), 48.0, 1.1, "power3.out"))
                .step(rise(self.subtitle(), 24.0, 0.9, "power2.out").at("-=0.6"))
                .step(rise(self.cta(), 16.0, 0.7, "power2.out").at("-=0.5"))
                .step(
                    AnimationStep::builder(self.cue())
                        .fade_in()
                        .duration(0.6)
                        .ease("power1.out")
                        .at("-=0.2"),
                )
                .build(),
            Variant::Noir => {
                let actions = self.actions();
                Timeline::builder("hero")
                    .delay(0.3)
                    .stagger(lines.clone(), 0.08, rise(first(&lines), 100.0, 1.0, "power3.out"))
                    .step(rise(self.subtitle(), 40.0, 0.8, "power3.out").at("-=0.6"))
                    .stagger(
                        actions.clone(),
                        0.15,
                        rise(first(&actions), 30.0, 0.6, "power3.out").at("-=0.4"),
                    )
                    .build()
            }
        }
    }

    /// Endless bounce of the scroll cue.
    pub fn bounce(&self) -> RevealResult<Timeline> {
        let (y, secs, ease, delay) = match self.content.variant {
            Variant::Clinic => (8.0, 1.1, "sine.inOut", 1.6),
            Variant::Noir => (-8.0, 0.5, "power1.inOut", 0.0),
        };
        Timeline::builder("hero-cue")
            .delay(delay)
            .repeat(Repeat::Infinite)
            .yoyo(true)
            .step(
                AnimationStep::builder(self.cue())
                    .to(Property::TranslateY, y)
                    .duration(secs)
                    .ease(ease),
            )
            .build()
    }
}

impl SectionController for Hero {
    fn name(&self) -> &str {
        "hero"
    }

    fn layout(&self) -> SectionLayout {
        let cta = match self.content.variant {
            Variant::Clinic => Block::leaf(self.cta()),
            Variant::Noir => Block::group(self.cta(), self.actions()),
        };
        SectionLayout::flow(
            self.anchor.clone(),
            Extent::Viewports(1.0),
            vec![
                Block::group(self.title(), self.lines()),
                Block::leaf(self.subtitle()),
                cta,
                Block::leaf(self.cue()),
            ],
        )
    }

    fn build(&self) -> RevealResult<SectionPlan> {
        Ok(SectionPlan {
            intros: vec![self.intro()?.shared(), self.bounce()?.shared()],
            ..SectionPlan::default()
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/hero.rs"]
mod tests;
