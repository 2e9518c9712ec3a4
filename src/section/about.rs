//! Biography-type sections: About and Philosophy (Clinic), Stats and Philosophy (Noir).

use crate::{
    foundation::core::TargetId,
    section::{
        Block, Extent, SectionLayout,
        reveal::{RevealGroup, RevealSection, children},
    },
    site::{Variant, content::SiteContent},
};

/// Number of `.reveal` blocks in the Clinic biography.
const ABOUT_BLOCKS: usize = 5;

/// Clinic biography: portrait, heading, two paragraphs and the credential grid.
pub fn about() -> RevealSection {
    let anchor = TargetId::new("sobre");
    let blocks = children(&anchor, "reveal", ABOUT_BLOCKS);
    let layout = SectionLayout::flow(
        anchor.clone(),
        Extent::Px(900.0),
        blocks.iter().cloned().map(Block::leaf).collect(),
    );
    RevealSection::new(
        "about",
        layout,
        vec![
            RevealGroup::new("about", anchor, blocks)
                .from_y(32.0)
                .duration(0.9)
                .stagger(0.12)
                .ease("power2.out")
                .start(72.0),
        ],
    )
}

/// Noir headline figures.
pub fn stats(content: &'static SiteContent) -> RevealSection {
    let anchor = TargetId::new("estatisticas");
    let items = children(&anchor, "stat", content.stats.len());
    let layout = SectionLayout::flow(
        anchor.clone(),
        Extent::Px(320.0),
        vec![Block::group(anchor.part("grid"), items.clone())],
    );
    RevealSection::new(
        "stats",
        layout,
        vec![
            RevealGroup::new("stats", anchor, items)
                .from_y(50.0)
                .duration(0.8)
                .stagger(0.15)
                .start(80.0),
        ],
    )
}

/// Philosophy statement.
///
/// Clinic reveals the pull quote, then slides the contrast statements in from the left once
/// their grid is in view. Noir reveals each paragraph on its own, each waiting a little longer.
pub fn philosophy(content: &'static SiteContent) -> RevealSection {
    match content.variant {
        Variant::Clinic => {
            let anchor = TargetId::new("abordagem");
            let quote = anchor.part("quote");
            let statements = anchor.part("statements");
            let lines = children(&statements, "contrast-line", content.contrasts.len());
            let layout = SectionLayout::flow(
                anchor.clone(),
                Extent::Px(1400.0),
                vec![
                    Block::leaf(quote.clone()),
                    Block::group(statements.clone(), lines.clone()),
                    Block::group(
                        anchor.part("process"),
                        children(&anchor.part("process"), "step", content.process.len()),
                    ),
                ],
            );
            RevealSection::new(
                "philosophy",
                layout,
                vec![
                    RevealGroup::new("philosophy-quote", anchor, vec![quote])
                        .from_y(40.0)
                        .duration(1.1)
                        .start(65.0),
                    RevealGroup::new("philosophy-contrasts", statements, lines)
                        .from_x(-30.0)
                        .duration(0.85)
                        .stagger(0.18)
                        .ease("power2.out")
                        .start(72.0),
                ],
            )
        }
        Variant::Noir => {
            let anchor = TargetId::new("about");
            let texts = children(&anchor, "text", content.philosophy.len());
            let mut blocks: Vec<Block> = texts.iter().cloned().map(Block::leaf).collect();
            blocks.push(Block::group(
                anchor.part("credentials"),
                children(&anchor.part("credentials"), "card", content.credentials.len()),
            ));
            let layout = SectionLayout::flow(anchor.clone(), Extent::Px(1200.0), blocks);
            RevealSection::new(
                "philosophy",
                layout,
                vec![
                    RevealGroup::new("philosophy", anchor, texts)
                        .from_y(60.0)
                        .duration(1.0)
                        .individually(0.2)
                        .start(80.0),
                ],
            )
        }
    }
}
