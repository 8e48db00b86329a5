//! Style translation engine.

mod engine;

pub use engine::StyleEngine;
