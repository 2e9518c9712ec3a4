use crate::{
    foundation::core::TargetId,
    section::{
        Block, Extent, SectionLayout,
        reveal::{RevealGroup, RevealSection, children},
    },
    site::{Variant, content::SiteContent},
};

/// Testimonial cards, revealed as one staggered group.
pub fn testimonials(content: &'static SiteContent) -> RevealSection {
    let anchor = TargetId::new("depoimentos");
    let cards = children(&anchor, "testimonial-card", content.testimonials.len());
    let layout = SectionLayout::flow(
        anchor.clone(),
        Extent::Px(900.0),
        vec![
            Block::leaf(anchor.part("heading")),
            Block::group(anchor.part("grid"), cards.clone()),
        ],
    );
    let group = RevealGroup::new("testimonials", anchor, cards);
    let group = match content.variant {
        Variant::Clinic => group
            .from_y(36.0)
            .duration(0.85)
            .stagger(0.12)
            .ease("power2.out")
            .start(70.0),
        Variant::Noir => group.from_y(60.0).duration(0.8).stagger(0.2).start(75.0),
    };
    RevealSection::new("testimonials", layout, vec![group])
}
