use dom::Id;

use crate::metrics::{Axis, Metrics};

// The offset-parent walk terminates when the chain runs out; this cap keeps
// it bounded even against a metrics source reporting a cyclic chain.
const MAX_OFFSET_CHAIN: usize = 256;

/// Effective viewport size along an axis: the window's inner dimension,
/// falling back to the document root's, then the body's, client dimension
/// for engines lacking the former.
pub fn viewport_size<M: Metrics>(metrics: &M, axis: Axis) -> f32 {
    metrics
        .window_inner(axis)
        .or_else(|| metrics.root_client(axis))
        .unwrap_or_else(|| metrics.body_client(axis))
}

pub fn viewport_center<M: Metrics>(metrics: &M, axis: Axis) -> f32 {
    viewport_size(metrics, axis) / 2.0
}

pub fn viewport_center_point<M: Metrics>(metrics: &M) -> (f32, f32) {
    (
        viewport_center(metrics, Axis::X),
        viewport_center(metrics, Axis::Y),
    )
}

/// Absolute page offset of an element: the sum of `offset_top` values up the
/// offset containment chain.
pub fn absolute_offset_top<M: Metrics>(metrics: &M, id: Id) -> f32 {
    let mut pos = 0.0;
    let mut current = Some(id);
    let mut steps = 0;
    while let Some(el) = current {
        pos += metrics.offset_top(el);
        current = metrics.offset_parent(el);
        steps += 1;
        if steps >= MAX_OFFSET_CHAIN {
            break;
        }
    }
    pos
}

/// Scroll position that vertically centers the element in the viewport,
/// clamped so we never scroll above the top of the page.
pub fn scroll_target<M: Metrics>(metrics: &M, id: Id) -> f32 {
    let pos = absolute_offset_top(metrics, id) - viewport_center(metrics, Axis::Y);
    pos.max(0.0)
}
