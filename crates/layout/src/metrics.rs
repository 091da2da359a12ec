use dom::Id;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Measured geometry of the rendered page.
///
/// The viewer never computes layout; every pixel it reasons about comes
/// from the rendering engine through this trait (element offset sizes,
/// offset-parent chains, window dimensions). Implementations must return
/// non-negative sizes.
pub trait Metrics {
    /// The window's inner dimension, when the engine exposes it.
    fn window_inner(&self, axis: Axis) -> Option<f32>;

    /// The document root's client dimension (older engines only).
    fn root_client(&self, axis: Axis) -> Option<f32>;

    /// The body's client dimension, the measurement of last resort.
    fn body_client(&self, axis: Axis) -> f32;

    /// Border-box extent of an element along the axis
    /// (`offsetWidth` / `offsetHeight`).
    fn offset_extent(&self, id: Id, axis: Axis) -> f32;

    /// Vertical offset of an element within its offset parent.
    fn offset_top(&self, id: Id) -> f32;

    /// The next element in the offset containment chain, or `None` at the
    /// top of the chain.
    fn offset_parent(&self, id: Id) -> Option<Id>;
}
