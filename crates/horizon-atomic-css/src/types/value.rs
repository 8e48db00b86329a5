//! Style value enumerators.
//!
//! Every shorthand accepts values from a closed set. Typed callers get the
//! check for free from the compiler; dynamic callers go through [`FromStr`]
//! or [`StyleValue::parse_for`], which reject anything outside the set.
//!
//! # Example
//!
//! ```
//! use horizon_atomic_css::prelude::*;
//!
//! let value = StyleValue::parse_for(ShorthandKey::P, "4").unwrap();
//! assert_eq!(value, StyleValue::Spacing(Spacing::S4));
//! assert_eq!(value.raw(), "4");
//!
//! assert!(StyleValue::parse_for(ShorthandKey::P, "7").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use super::{ShorthandKey, ValueKind};
use crate::{Error, Result};

/// A step on the spacing scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Spacing {
    S1 = 1,
    S2 = 2,
    S3 = 3,
    S4 = 4,
    S5 = 5,
    S6 = 6,
    S8 = 8,
    S10 = 10,
}

impl Spacing {
    /// All spacing steps, smallest first.
    pub const ALL: [Spacing; 8] = [
        Spacing::S1,
        Spacing::S2,
        Spacing::S3,
        Spacing::S4,
        Spacing::S5,
        Spacing::S6,
        Spacing::S8,
        Spacing::S10,
    ];

    /// The numeric step as written by callers.
    pub fn scale(&self) -> u8 {
        *self as u8
    }

    /// The raw token used in class names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Spacing::S1 => "1",
            Spacing::S2 => "2",
            Spacing::S3 => "3",
            Spacing::S4 => "4",
            Spacing::S5 => "5",
            Spacing::S6 => "6",
            Spacing::S8 => "8",
            Spacing::S10 => "10",
        }
    }
}

impl TryFrom<u8> for Spacing {
    type Error = Error;

    fn try_from(scale: u8) -> Result<Self> {
        Spacing::ALL
            .into_iter()
            .find(|s| s.scale() == scale)
            .ok_or_else(|| Error::invalid_value("spacing", scale.to_string()))
    }
}

impl FromStr for Spacing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Spacing::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| Error::invalid_value("spacing", s))
    }
}

/// A named theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorKey {
    Primary,
    Secondary,
    Neutral,
    Error,
}

impl ColorKey {
    /// All color keys.
    pub const ALL: [ColorKey; 4] = [
        ColorKey::Primary,
        ColorKey::Secondary,
        ColorKey::Neutral,
        ColorKey::Error,
    ];

    /// The raw token used in class names.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKey::Primary => "primary",
            ColorKey::Secondary => "secondary",
            ColorKey::Neutral => "neutral",
            ColorKey::Error => "error",
        }
    }
}

impl FromStr for ColorKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColorKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::invalid_value("color", s))
    }
}

/// A `display` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Display {
    None,
    Flex,
    Block,
    InlineBlock,
}

impl Display {
    /// All display keywords.
    pub const ALL: [Display; 4] = [
        Display::None,
        Display::Flex,
        Display::Block,
        Display::InlineBlock,
    ];

    /// The CSS keyword, which is also the class-name token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Flex => "flex",
            Display::Block => "block",
            Display::InlineBlock => "inline-block",
        }
    }
}

impl FromStr for Display {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Display::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| Error::invalid_value("display", s))
    }
}

/// A flex direction token.
///
/// `Col` is emitted verbatim as `col`, not as the CSS keyword `column`.
/// Existing stylesheets depend on the literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexDirection {
    Row,
    Col,
}

impl FlexDirection {
    /// Both direction tokens.
    pub const ALL: [FlexDirection; 2] = [FlexDirection::Row, FlexDirection::Col];

    /// The raw token.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Col => "col",
        }
    }
}

impl FromStr for FlexDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FlexDirection::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| Error::invalid_value("flex", s))
    }
}

/// A value attached to a shorthand key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleValue {
    Spacing(Spacing),
    Color(ColorKey),
    Display(Display),
    FlexDirection(FlexDirection),
}

impl StyleValue {
    /// The value exactly as a caller writes it (`4`, `primary`, `col`).
    pub fn raw(&self) -> &'static str {
        match self {
            StyleValue::Spacing(s) => s.as_str(),
            StyleValue::Color(c) => c.as_str(),
            StyleValue::Display(d) => d.as_str(),
            StyleValue::FlexDirection(f) => f.as_str(),
        }
    }

    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            StyleValue::Spacing(_) => ValueKind::Spacing,
            StyleValue::Color(_) => ValueKind::Color,
            StyleValue::Display(_) => ValueKind::Display,
            StyleValue::FlexDirection(_) => ValueKind::FlexDirection,
        }
    }

    /// Parse a raw token as the value kind `key` accepts.
    ///
    /// Errors carry the shorthand key, not the value kind, so callers can
    /// point at the offending entry.
    pub fn parse_for(key: ShorthandKey, raw: &str) -> Result<Self> {
        let parsed = match key.value_kind() {
            ValueKind::Spacing => raw.parse().map(StyleValue::Spacing),
            ValueKind::Color => raw.parse().map(StyleValue::Color),
            ValueKind::Display => raw.parse().map(StyleValue::Display),
            ValueKind::FlexDirection => raw.parse().map(StyleValue::FlexDirection),
        };
        parsed.map_err(|_| Error::invalid_value(key.as_str(), raw))
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

impl From<Spacing> for StyleValue {
    fn from(value: Spacing) -> Self {
        StyleValue::Spacing(value)
    }
}

impl From<ColorKey> for StyleValue {
    fn from(value: ColorKey) -> Self {
        StyleValue::Color(value)
    }
}

impl From<Display> for StyleValue {
    fn from(value: Display) -> Self {
        StyleValue::Display(value)
    }
}

impl From<FlexDirection> for StyleValue {
    fn from(value: FlexDirection) -> Self {
        StyleValue::FlexDirection(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_from_scale() {
        assert_eq!(Spacing::try_from(8).unwrap(), Spacing::S8);
        assert!(Spacing::try_from(7).is_err());
        assert!(Spacing::try_from(0).is_err());
    }

    #[test]
    fn spacing_skips_seven_and_nine() {
        let scales: Vec<u8> = Spacing::ALL.iter().map(Spacing::scale).collect();
        assert_eq!(scales, vec![1, 2, 3, 4, 5, 6, 8, 10]);
    }

    #[test]
    fn raw_tokens() {
        assert_eq!(StyleValue::from(Spacing::S10).raw(), "10");
        assert_eq!(StyleValue::from(ColorKey::Neutral).raw(), "neutral");
        assert_eq!(StyleValue::from(Display::InlineBlock).raw(), "inline-block");
        assert_eq!(StyleValue::from(FlexDirection::Col).raw(), "col");
    }

    #[test]
    fn parse_for_checks_kind() {
        assert_eq!(
            StyleValue::parse_for(ShorthandKey::Bg, "error").unwrap(),
            StyleValue::Color(ColorKey::Error)
        );
        assert_eq!(
            StyleValue::parse_for(ShorthandKey::D, "inline-block").unwrap(),
            StyleValue::Display(Display::InlineBlock)
        );

        // A valid color is still invalid for a spacing key.
        let err = StyleValue::parse_for(ShorthandKey::M, "primary").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValue { ref key, ref value } if key == "m" && value == "primary"
        ));
    }

    #[test]
    fn column_is_not_col() {
        assert!(StyleValue::parse_for(ShorthandKey::Flex, "column").is_err());
    }

    #[test]
    fn value_kind_matches_variant() {
        assert_eq!(StyleValue::from(Spacing::S1).kind(), ValueKind::Spacing);
        assert_eq!(StyleValue::from(ColorKey::Primary).kind(), ValueKind::Color);
        assert_eq!(StyleValue::from(Display::None).kind(), ValueKind::Display);
        assert_eq!(StyleValue::from(FlexDirection::Row).kind(), ValueKind::FlexDirection);
    }
}
