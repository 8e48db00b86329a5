//! Typed style builder DSL.

use super::StyleRequest;
use crate::types::{ColorKey, Display, FlexDirection, ShorthandKey, Spacing, StyleValue};

/// Builder for style requests with a fluent API.
///
/// Each setter only accepts the value type its shorthand allows, so a
/// request built here can never carry an out-of-set value. Setters take
/// `impl Into<Option<T>>`; passing `None` records the key as unset.
///
/// # Example
///
/// ```
/// use horizon_atomic_css::prelude::*;
///
/// let request = Style::new()
///     .p(Spacing::S4)
///     .bg(ColorKey::Primary)
///     .d(Display::Flex)
///     .build();
///
/// let engine = StyleEngine::new();
/// assert_eq!(engine.translate(&request).unwrap(), "p-4 bg-primary d-flex");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Style {
    request: StyleRequest,
}

impl Style {
    /// Create a new style builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the final request.
    pub fn build(self) -> StyleRequest {
        self.request
    }

    fn entry<T: Into<StyleValue>>(mut self, key: ShorthandKey, value: Option<T>) -> Self {
        let value: Option<StyleValue> = value.map(Into::into);
        self.request.set(key, value);
        self
    }

    // === Spacing ===

    /// Set margin on all sides.
    pub fn m(self, value: impl Into<Option<Spacing>>) -> Self {
        self.entry(ShorthandKey::M, value.into())
    }

    /// Set padding on all sides.
    pub fn p(self, value: impl Into<Option<Spacing>>) -> Self {
        self.entry(ShorthandKey::P, value.into())
    }

    /// Set left and right margin.
    pub fn mx(self, value: impl Into<Option<Spacing>>) -> Self {
        self.entry(ShorthandKey::Mx, value.into())
    }

    /// Set top and bottom padding.
    pub fn py(self, value: impl Into<Option<Spacing>>) -> Self {
        self.entry(ShorthandKey::Py, value.into())
    }

    // === Color ===

    /// Set background color.
    pub fn bg(self, value: impl Into<Option<ColorKey>>) -> Self {
        self.entry(ShorthandKey::Bg, value.into())
    }

    /// Set text color.
    pub fn c(self, value: impl Into<Option<ColorKey>>) -> Self {
        self.entry(ShorthandKey::C, value.into())
    }

    // === Layout ===

    /// Set display.
    pub fn d(self, value: impl Into<Option<Display>>) -> Self {
        self.entry(ShorthandKey::D, value.into())
    }

    /// Set flex direction.
    pub fn flex(self, value: impl Into<Option<FlexDirection>>) -> Self {
        self.entry(ShorthandKey::Flex, value.into())
    }
}
