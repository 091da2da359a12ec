use css::{HorizontalAnchor, Length, VerticalAnchor};
use dom::Id;

use crate::metrics::{Axis, Metrics};
use crate::viewport::viewport_size;

/// A resolved per-axis offset: either a computed pixel value or a literal
/// length passed straight through to the style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorOffset {
    Px(f32),
    Literal(Length),
}

/// Offset that centers a box of `extent` in a viewport of `viewport`,
/// clamped to keep the box on-screen.
pub fn centered_offset(viewport: f32, extent: f32) -> f32 {
    ((viewport - extent) / 2.0).max(0.0)
}

/// Offset that flushes a box of `extent` against the far edge, clamped to 0.
pub fn far_edge_offset(viewport: f32, extent: f32) -> f32 {
    (viewport - extent).max(0.0)
}

pub fn horizontal_offset<M: Metrics>(metrics: &M, id: Id, anchor: HorizontalAnchor) -> AnchorOffset {
    match anchor {
        HorizontalAnchor::Center => AnchorOffset::Px(centered_offset(
            viewport_size(metrics, Axis::X),
            metrics.offset_extent(id, Axis::X),
        )),
        HorizontalAnchor::Left => AnchorOffset::Px(0.0),
        HorizontalAnchor::Right => AnchorOffset::Px(far_edge_offset(
            viewport_size(metrics, Axis::X),
            metrics.offset_extent(id, Axis::X),
        )),
        HorizontalAnchor::Length(l) => AnchorOffset::Literal(l),
    }
}

pub fn vertical_offset<M: Metrics>(metrics: &M, id: Id, anchor: VerticalAnchor) -> AnchorOffset {
    match anchor {
        VerticalAnchor::Center => AnchorOffset::Px(centered_offset(
            viewport_size(metrics, Axis::Y),
            metrics.offset_extent(id, Axis::Y),
        )),
        VerticalAnchor::Top => AnchorOffset::Px(0.0),
        VerticalAnchor::Bottom => AnchorOffset::Px(far_edge_offset(
            viewport_size(metrics, Axis::Y),
            metrics.offset_extent(id, Axis::Y),
        )),
        VerticalAnchor::Length(l) => AnchorOffset::Literal(l),
    }
}
