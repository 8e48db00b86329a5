//! Build-time atomic CSS generation for Horizon Lattice.
//!
//! This crate maps a small, typed set of style shorthands to atomic class
//! names and collects one CSS rule per unique class:
//!
//! - **Shorthands**: `m`, `p`, `mx`, `py`, `bg`, `c`, `d`, `flex`
//! - **Closed values**: spacing steps, color keys, display and flex tokens
//! - **Deduplication**: each class name is rendered and stored once
//! - **Themes**: override spacing and color values from TOML
//!
//! # Example
//!
//! ```
//! use horizon_atomic_css::prelude::*;
//!
//! let engine = StyleEngine::new();
//!
//! let card = engine
//!     .translate(&Style::new().p(Spacing::S4).bg(ColorKey::Primary).build())
//!     .unwrap();
//! assert_eq!(card, "p-4 bg-primary");
//!
//! let row = engine
//!     .translate(&Style::new().mx(Spacing::S5).p(Spacing::S4).build())
//!     .unwrap();
//! assert_eq!(row, "mx-5 p-4");
//!
//! assert_eq!(
//!     engine.dump(),
//!     ".p-4 { padding: 16px; }\n\
//!      .bg-primary { background-color: #0070f3; }\n\
//!      .mx-5 { margin-left: 24px; margin-right: 24px; }"
//! );
//! ```

pub mod types;
pub mod tables;
pub mod theme;
pub mod request;
pub mod rules;
pub mod resolve;
pub mod output;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::types::{ColorKey, Display, FlexDirection, ShorthandKey, Spacing, StyleValue};
    pub use crate::request::{Style, StyleRequest};
    pub use crate::rules::{AtomicRule, Declaration, Registry};
    pub use crate::resolve::StyleEngine;
    pub use crate::theme::Theme;
    pub use crate::output::write_stylesheet;
    pub use crate::{Error, Result};
}
