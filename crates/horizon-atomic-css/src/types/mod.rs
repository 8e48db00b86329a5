//! Shorthand keys and their closed value sets.

mod key;
mod value;

pub use key::{ShorthandKey, ValueKind};
pub use value::{ColorKey, Display, FlexDirection, Spacing, StyleValue};
