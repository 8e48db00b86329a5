//! Static lookup tables.
//!
//! Pure translation from shorthand keys and values to CSS: spacing steps to
//! pixel strings, color keys to hex strings, and shorthand keys to the real
//! CSS properties they expand to.

use crate::types::{ColorKey, ShorthandKey, Spacing, StyleValue};
use crate::{Error, Result};

/// Pixel string for a spacing step.
pub fn resolve_spacing(scale: Spacing) -> &'static str {
    match scale {
        Spacing::S1 => "4px",
        Spacing::S2 => "8px",
        Spacing::S3 => "12px",
        Spacing::S4 => "16px",
        Spacing::S5 => "24px",
        Spacing::S6 => "32px",
        Spacing::S8 => "48px",
        Spacing::S10 => "64px",
    }
}

/// Hex string for a color key.
pub fn resolve_color(key: ColorKey) -> &'static str {
    match key {
        ColorKey::Primary => "#0070f3",
        ColorKey::Secondary => "#16a34a",
        ColorKey::Neutral => "#475569",
        ColorKey::Error => "#ef4444",
    }
}

/// Real CSS property names for a shorthand key.
///
/// Compound keys expand to several properties; declarations must be emitted
/// in the returned order.
pub fn resolve_property_names(key: ShorthandKey) -> &'static [&'static str] {
    match key {
        ShorthandKey::M => &["margin"],
        ShorthandKey::P => &["padding"],
        ShorthandKey::Mx => &["margin-left", "margin-right"],
        ShorthandKey::Py => &["padding-top", "padding-bottom"],
        ShorthandKey::Bg => &["background-color"],
        ShorthandKey::C => &["color"],
        ShorthandKey::D => &["display"],
        ShorthandKey::Flex => &["flex-direction"],
    }
}

/// CSS value for a shorthand entry.
///
/// Spacing and color keys are translated through the tables; `d` and `flex`
/// pass the raw token through. A value of the wrong kind for `key` is
/// rejected rather than rendered.
pub fn resolve_value(key: ShorthandKey, value: &StyleValue) -> Result<String> {
    if value.kind() != key.value_kind() {
        return Err(Error::invalid_value(key.as_str(), value.raw()));
    }
    match value {
        StyleValue::Spacing(scale) => Ok(resolve_spacing(*scale).to_owned()),
        StyleValue::Color(color) => Ok(resolve_color(*color).to_owned()),
        StyleValue::Display(_) | StyleValue::FlexDirection(_) => Ok(value.raw().to_owned()),
    }
}
