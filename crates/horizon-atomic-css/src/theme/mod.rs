//! Theme overrides for the lookup tables.

mod config;
mod overrides;

pub use overrides::Theme;
