use std::collections::BTreeMap;

use crate::{
    animation::value::{AnimValue, Property},
    foundation::core::{Rect, Size, TargetId},
    host::{Layout, StyleSink},
};

/// In-memory document: a map of element extents, a viewport, a scroll offset and the last value
/// written for every (target, property) pair.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    elements: BTreeMap<String, Rect>,
    viewport: Size,
    scroll_y: f64,
    styles: BTreeMap<(TargetId, Property), AnimValue>,
    writes: u64,
}

impl MemoryHost {
    /// Empty document with the given viewport, scrolled to the top.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Builder-style [`Self::set_element`].
    pub fn with_element(mut self, id: impl Into<String>, rect: Rect) -> Self {
        self.set_element(id, rect);
        self
    }

    /// Insert or move element `id`.
    pub fn set_element(&mut self, id: impl Into<String>, rect: Rect) {
        self.elements.insert(id.into(), rect);
    }

    /// Detach element `id`; returns whether it existed.
    pub fn remove_element(&mut self, id: &str) -> bool {
        self.elements.remove(id).is_some()
    }

    /// Known element ids in lexical order.
    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// Bottom of the lowest element.
    pub fn document_height(&self) -> f64 {
        self.elements.values().map(|r| r.y1).fold(0.0, f64::max)
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    /// Move the scroll offset; negative offsets clamp to the top.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    /// Change the viewport size.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Last value written for `property` of `target`.
    pub fn style(&self, target: &TargetId, property: &Property) -> Option<AnimValue> {
        self.styles.get(&(target.clone(), property.clone())).copied()
    }

    /// Last numeric value written for `property` of `target`.
    pub fn number(&self, target: &str, property: Property) -> Option<f64> {
        self.style(&TargetId::new(target), &property)
            .and_then(|v| v.as_number())
    }

    /// Every (target, property) pair written so far.
    pub fn styles(&self) -> impl Iterator<Item = (&TargetId, &Property, &AnimValue)> {
        self.styles.iter().map(|((t, p), v)| (t, p, v))
    }

    /// Total number of writes received.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl Layout for MemoryHost {
    fn element_bounds(&self, id: &str) -> Option<Rect> {
        self.elements.get(id).copied()
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_y
    }
}

impl StyleSink for MemoryHost {
    fn apply(&mut self, target: &TargetId, property: &Property, value: AnimValue) {
        self.writes += 1;
        self.styles
            .insert((target.clone(), property.clone()), value);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/memory.rs"]
mod tests;
