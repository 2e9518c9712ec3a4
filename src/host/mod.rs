//! Boundary between the engine and whatever renders the page.
//!
//! The engine never owns geometry or styles: it reads element extents, the viewport and the
//! scroll offset through [`Layout`], and writes interpolated values through [`StyleSink`].

use crate::{
    animation::value::{AnimValue, Property},
    foundation::core::{Rect, Size, TargetId},
};

pub(crate) mod memory;

/// Read side of the host: document geometry and scroll position.
pub trait Layout {
    /// Extent of element `id` in document coordinates, or `None` if it is not in the document.
    fn element_bounds(&self, id: &str) -> Option<Rect>;

    /// Current viewport size.
    fn viewport(&self) -> Size;

    /// Current vertical scroll offset in px.
    fn scroll_offset(&self) -> f64;
}

/// Write side of the host: receives interpolated property values.
pub trait StyleSink {
    /// Set `property` of `target` to `value`.
    fn apply(&mut self, target: &TargetId, property: &Property, value: AnimValue);
}

/// Anything that can both be measured and styled.
pub trait Host: Layout + StyleSink {}

impl<T: Layout + StyleSink> Host for T {}
