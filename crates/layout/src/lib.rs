mod metrics;
pub mod position;
pub mod viewport;

pub use metrics::{Axis, Metrics};
pub use position::{AnchorOffset, centered_offset, far_edge_offset, horizontal_offset, vertical_offset};
pub use viewport::{scroll_target, viewport_center, viewport_center_point, viewport_size};
