pub mod placement;
pub mod values;

// Re-exports so other crates can just use `css::...` nicely.
pub use placement::{HorizontalAnchor, VerticalAnchor, parse_x_anchor, parse_y_anchor};
pub use values::{Display, Length, LengthUnit, parse_display, parse_length};
