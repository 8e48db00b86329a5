//! Style requests: the per-element input to the engine.

mod builder;
mod entries;

pub use builder::Style;
pub use entries::StyleRequest;
