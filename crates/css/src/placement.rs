use crate::values::{Length, parse_length};

/// Horizontal placement of a positioned element: a symbolic keyword or a
/// literal length written straight into the `left` style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HorizontalAnchor {
    Center,
    Left,
    Right,
    Length(Length),
}

/// Vertical placement: keyword or literal length for the `top` style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalAnchor {
    Center,
    Top,
    Bottom,
    Length(Length),
}

// input: "center", "left", "right", or a literal like "25%" / "10px"
// output: None for anything else; unrecognized values are ignored,
// leaving the axis unset.
pub fn parse_x_anchor(value: &str) -> Option<HorizontalAnchor> {
    match value.trim() {
        "center" => Some(HorizontalAnchor::Center),
        "left" => Some(HorizontalAnchor::Left),
        "right" => Some(HorizontalAnchor::Right),
        other => parse_length(other).map(HorizontalAnchor::Length),
    }
}

// input: "center", "top", "bottom", or a literal length
pub fn parse_y_anchor(value: &str) -> Option<VerticalAnchor> {
    match value.trim() {
        "center" => Some(VerticalAnchor::Center),
        "top" => Some(VerticalAnchor::Top),
        "bottom" => Some(VerticalAnchor::Bottom),
        other => parse_length(other).map(VerticalAnchor::Length),
    }
}
