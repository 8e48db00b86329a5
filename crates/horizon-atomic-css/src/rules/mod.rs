//! Atomic rules and the deduplicating registry.

mod registry;
mod rule;

pub use registry::Registry;
pub use rule::{AtomicRule, Declaration};
