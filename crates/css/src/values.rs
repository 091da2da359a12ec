use std::fmt;

/// CSS length units the positioning contract accepts in literal offsets:
/// `<digits>(%|px|em|mm|cm|in|pt|pc)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Percent,
    Px,
    Em,
    Mm,
    Cm,
    In,
    Pt,
    Pc,
}

impl LengthUnit {
    pub fn as_css(self) -> &'static str {
        match self {
            LengthUnit::Percent => "%",
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Mm => "mm",
            LengthUnit::Cm => "cm",
            LengthUnit::In => "in",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
        }
    }
}

/// A CSS length value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub fn px(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Integer-valued lengths render without a fraction, matching the
        // strings the page scripts wrote into style attributes.
        if self.value.fract() == 0.0 {
            write!(f, "{}{}", self.value as i64, self.unit.as_css())
        } else {
            write!(f, "{}{}", self.value, self.unit.as_css())
        }
    }
}

/// CSS `display` values the viewer toggles between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Inline,
    InlineBlock,
    TableCell,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Inline => "inline",
            Display::InlineBlock => "inline-block",
            Display::TableCell => "table-cell",
        }
    }
}

/// Parse a literal length offset. The accepted grammar is deliberately
/// narrow: `<digits><unit>` with no sign, no fraction, and no whitespace
/// inside the token.
pub fn parse_length(value: &str) -> Option<Length> {
    let v = value.trim();

    let (digits, unit) = split_unit(v)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = digits.parse::<u32>().ok()? as f32;
    Some(Length { value, unit })
}

fn split_unit(v: &str) -> Option<(&str, LengthUnit)> {
    if let Some(rest) = v.strip_suffix('%') {
        return Some((rest, LengthUnit::Percent));
    }
    for (suffix, unit) in [
        ("px", LengthUnit::Px),
        ("em", LengthUnit::Em),
        ("mm", LengthUnit::Mm),
        ("cm", LengthUnit::Cm),
        ("in", LengthUnit::In),
        ("pt", LengthUnit::Pt),
        ("pc", LengthUnit::Pc),
    ] {
        if let Some(rest) = v.strip_suffix(suffix) {
            return Some((rest, unit));
        }
    }
    None
}

/// Parse a `display` value into a Display enum.
/// We keep this strict and only support the values the viewer writes.
pub fn parse_display(value: &str) -> Option<Display> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" => Some(Display::None),
        "block" => Some(Display::Block),
        "inline" => Some(Display::Inline),
        "inline-block" => Some(Display::InlineBlock),
        "table-cell" => Some(Display::TableCell),
        _ => None, // unknown / unsupported → ignored
    }
}
