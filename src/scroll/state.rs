use crate::{
    foundation::core::{ScrollDirection, Size},
    host::Layout,
};

/// Snapshot of the host's scroll position taken at the start of an evaluation pass.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollState {
    /// Vertical scroll offset in px.
    pub offset: f64,
    /// Viewport size at the time of the pass.
    pub viewport: Size,
    /// Movement relative to the previous pass.
    pub direction: ScrollDirection,
}

impl ScrollState {
    /// Read the host, comparing against the previous pass's offset.
    pub fn read(layout: &dyn Layout, previous: Option<f64>) -> Self {
        let offset = layout.scroll_offset();
        Self {
            offset,
            viewport: layout.viewport(),
            direction: previous
                .map(|prev| ScrollDirection::between(prev, offset))
                .unwrap_or_default(),
        }
    }
}
