//! Card grids: Specialties (Clinic), Features and Conditions (Noir).

use crate::{
    animation::value::{AnimValue, Property},
    foundation::{core::TargetId, error::RevealResult},
    host::StyleSink,
    section::{
        Block, Extent, SectionController, SectionLayout, SectionPlan,
        reveal::{RevealGroup, RevealSection, children},
    },
    site::content::SiteContent,
    timers::{FrameDriven, ROTATE_INTERVAL, Rotator, TYPE_INTERVAL, Typewriter, weekday_active},
};

/// Clinic specialty cards plus the static list of treated conditions.
pub fn specialties(content: &'static SiteContent) -> RevealSection {
    let anchor = TargetId::new("especialidades");
    let cards = children(&anchor, "specialty-card", content.specialties.len());
    let layout = SectionLayout::flow(
        anchor.clone(),
        Extent::Px(1300.0),
        vec![
            Block::leaf(anchor.part("heading")),
            Block::group(anchor.part("grid"), cards.clone()),
            Block::group(
                anchor.part("conditions"),
                children(&anchor.part("conditions"), "item", content.conditions.len()),
            ),
        ],
    );
    RevealSection::new(
        "specialties",
        layout,
        vec![
            RevealGroup::new("specialties", anchor, cards)
                .from_y(40.0)
                .duration(0.85)
                .stagger(0.1)
                .ease("power2.out")
                .start(70.0),
        ],
    )
}

/// Noir list of treated conditions, revealed chip by chip.
pub fn conditions(content: &'static SiteContent) -> RevealSection {
    let anchor = TargetId::new("condicoes");
    let list = anchor.part("list");
    let items = children(&list, "item", content.conditions.len());
    let layout = SectionLayout::flow(
        anchor.clone(),
        Extent::Px(520.0),
        vec![
            Block::leaf(anchor.part("heading")),
            Block::group(list.clone(), items.clone()),
        ],
    );
    RevealSection::new(
        "conditions",
        layout,
        vec![
            RevealGroup::new("conditions", list, items)
                .from_y(30.0)
                .duration(0.6)
                .stagger(0.08)
                .start(85.0),
        ],
    )
}

/// Noir feature cards: a staggered reveal plus three interactive artifacts driven by timers.
///
/// Card 0 is the shuffler, card 1 types a diagnostic line, card 2 lights up the weekdays
/// whenever the rotation reaches it.
#[derive(Clone, Debug)]
pub struct Features {
    content: &'static SiteContent,
    anchor: TargetId,
}

impl Features {
    pub fn new(content: &'static SiteContent) -> Self {
        Self {
            content,
            anchor: TargetId::new("tratamentos"),
        }
    }

    fn cards(&self) -> Vec<TargetId> {
        children(&self.anchor, "card", self.content.specialties.len())
    }

    fn reveal(&self) -> RevealGroup {
        RevealGroup::new("features", self.anchor.clone(), self.cards())
            .from_y(60.0)
            .duration(0.8)
            .stagger(0.15)
            .start(70.0)
    }

    /// Timers behind the interactive cards.
    pub fn timers(&self) -> RevealResult<FeatureTimers> {
        let cards = self.cards();
        let terminal = self.anchor.child("card", 1).part("terminal");
        let days = children(&self.anchor.child("card", 2), "day", self.content.weekdays.len());
        Ok(FeatureTimers {
            typewriter: Typewriter::new(self.content.typewriter, TYPE_INTERVAL)?,
            rotator: Rotator::new(cards.len().max(1), ROTATE_INTERVAL)?,
            cards,
            terminal,
            days,
            published: false,
        })
    }
}

impl SectionController for Features {
    fn name(&self) -> &str {
        "features"
    }

    fn layout(&self) -> SectionLayout {
        SectionLayout::flow(
            self.anchor.clone(),
            Extent::Px(1000.0),
            vec![
                Block::leaf(self.anchor.part("heading")),
                Block::group(self.anchor.part("grid"), self.cards()),
            ],
        )
    }

    fn build(&self) -> RevealResult<SectionPlan> {
        Ok(SectionPlan {
            regions: self.reveal().regions()?,
            timers: vec![Box::new(self.timers()?)],
            ..SectionPlan::default()
        })
    }
}

/// Typewriter, card rotation and weekday highlighter of the feature grid.
///
/// Publishes `typed` (characters shown) on the terminal, `active` (0 or 1) on every card and
/// every weekday.
#[derive(Clone, Debug)]
pub struct FeatureTimers {
    typewriter: Typewriter,
    rotator: Rotator,
    cards: Vec<TargetId>,
    terminal: TargetId,
    days: Vec<TargetId>,
    published: bool,
}

impl FeatureTimers {
    /// Terminal typewriter state.
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    /// Index of the highlighted card.
    pub fn active_card(&self) -> usize {
        self.rotator.active()
    }

    /// Hovering a card makes it the active one.
    pub fn hover(&mut self, card: usize, sink: &mut dyn StyleSink) {
        self.rotator.set_active(card);
        self.publish_active(sink);
    }

    fn publish_typed(&self, sink: &mut dyn StyleSink) {
        let typed = Property::Custom("typed".into());
        sink.apply(
            &self.terminal,
            &typed,
            AnimValue::Number(self.typewriter.shown() as f64),
        );
    }

    fn publish_active(&self, sink: &mut dyn StyleSink) {
        let active = Property::Custom("active".into());
        let flag = |on: bool| AnimValue::Number(if on { 1.0 } else { 0.0 });
        let current = self.rotator.active();
        for (i, card) in self.cards.iter().enumerate() {
            sink.apply(card, &active, flag(i == current));
        }
        for (d, day) in self.days.iter().enumerate() {
            sink.apply(day, &active, flag(weekday_active(current, d)));
        }
    }
}

impl FrameDriven for FeatureTimers {
    fn frame(&mut self, dt: f64, sink: &mut dyn StyleSink) -> bool {
        let typed = self.typewriter.advance(dt);
        let rotated = self.rotator.advance(dt);
        let first = !self.published;
        self.published = true;
        if typed || first {
            self.publish_typed(sink);
        }
        if rotated || first {
            self.publish_active(sink);
        }
        typed || rotated || first
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/specialties.rs"]
mod tests;
