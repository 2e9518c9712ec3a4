//! Synthetic stacked layout: every section gets its nominal height, one below the other, and
//! shares it evenly among its children.

use crate::{
    foundation::core::{Rect, Size, TargetId},
    host::memory::MemoryHost,
    section::SectionLayout,
    site::Variant,
};

/// Element extents of `variant` laid out for `viewport`, in document order.
pub fn synthetic_layout(variant: Variant, viewport: Size) -> Vec<(TargetId, Rect)> {
    let mut out = Vec::new();
    let mut y = 0.0;
    for section in variant.sections() {
        place(&section.layout(), viewport, &mut y, &mut out);
    }
    out
}

/// A [`MemoryHost`] holding [`synthetic_layout`], scrolled to the top.
pub fn synthetic_host(variant: Variant, viewport: Size) -> MemoryHost {
    synthetic_layout(variant, viewport)
        .into_iter()
        .fold(MemoryHost::new(viewport), |host, (id, rect)| {
            host.with_element(id.as_str(), rect)
        })
}

fn place(layout: &SectionLayout, viewport: Size, y: &mut f64, out: &mut Vec<(TargetId, Rect)>) {
    let height = layout.extent.resolve(viewport.height);
    let top = if layout.fixed { 0.0 } else { *y };
    let width = viewport.width;
    out.push((layout.anchor.clone(), Rect::new(0.0, top, width, top + height)));
    if !layout.fixed {
        *y += height;
    }

    let blocks = layout.blocks.len();
    if blocks == 0 {
        return;
    }
    let block_h = height / blocks as f64;
    for (i, block) in layout.blocks.iter().enumerate() {
        let b0 = top + i as f64 * block_h;
        out.push((block.id.clone(), Rect::new(0.0, b0, width, b0 + block_h)));
        let parts = block.parts.len();
        if parts == 0 {
            continue;
        }
        let part_h = block_h / parts as f64;
        for (j, part) in block.parts.iter().enumerate() {
            let p0 = b0 + j as f64 * part_h;
            out.push((part.clone(), Rect::new(0.0, p0, width, p0 + part_h)));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/layout.rs"]
mod tests;
