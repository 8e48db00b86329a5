//! Shorthand style keys.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A shorthand style dimension.
///
/// The set is closed: every key maps to a fixed list of real CSS properties
/// and accepts exactly one [`ValueKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShorthandKey {
    /// `margin`
    M,
    /// `padding`
    P,
    /// `margin-left` and `margin-right`
    Mx,
    /// `padding-top` and `padding-bottom`
    Py,
    /// `background-color`
    Bg,
    /// `color`
    C,
    /// `display`
    D,
    /// `flex-direction`
    Flex,
}

/// The kind of value a shorthand key accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A [`Spacing`](super::Spacing) step.
    Spacing,
    /// A [`ColorKey`](super::ColorKey).
    Color,
    /// A [`Display`](super::Display) keyword.
    Display,
    /// A [`FlexDirection`](super::FlexDirection) token.
    FlexDirection,
}

impl ShorthandKey {
    /// All shorthand keys, in declaration order.
    pub const ALL: [ShorthandKey; 8] = [
        ShorthandKey::M,
        ShorthandKey::P,
        ShorthandKey::Mx,
        ShorthandKey::Py,
        ShorthandKey::Bg,
        ShorthandKey::C,
        ShorthandKey::D,
        ShorthandKey::Flex,
    ];

    /// The token used in class names (`m`, `mx`, `bg`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ShorthandKey::M => "m",
            ShorthandKey::P => "p",
            ShorthandKey::Mx => "mx",
            ShorthandKey::Py => "py",
            ShorthandKey::Bg => "bg",
            ShorthandKey::C => "c",
            ShorthandKey::D => "d",
            ShorthandKey::Flex => "flex",
        }
    }

    /// The kind of value this key accepts.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            ShorthandKey::M | ShorthandKey::P | ShorthandKey::Mx | ShorthandKey::Py => {
                ValueKind::Spacing
            }
            ShorthandKey::Bg | ShorthandKey::C => ValueKind::Color,
            ShorthandKey::D => ValueKind::Display,
            ShorthandKey::Flex => ValueKind::FlexDirection,
        }
    }
}

impl fmt::Display for ShorthandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShorthandKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShorthandKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::unknown_key(s))
    }
}
