//! Value overrides layered over the built-in tables.

use std::collections::HashMap;

use crate::tables;
use crate::types::{ColorKey, ShorthandKey, Spacing, StyleValue, ValueKind};
use crate::{Error, Result};

/// Resolved values used when rendering declarations.
///
/// A theme only replaces the CSS *values* of spacing steps and colors.
/// Class names are built from raw tokens and never depend on the theme, so
/// `p-4` stays `p-4` whatever `4` resolves to.
///
/// # Example
///
/// ```
/// use horizon_atomic_css::prelude::*;
///
/// let theme = Theme::new()
///     .with_spacing(Spacing::S4, "1rem")?
///     .with_color(ColorKey::Primary, "rebeccapurple")?;
///
/// assert_eq!(theme.spacing(Spacing::S4), "1rem");
/// assert_eq!(theme.spacing(Spacing::S2), "8px");
/// assert_eq!(theme.color(ColorKey::Primary), "rebeccapurple");
///
/// // Values that would break out of the declaration are refused.
/// assert!(Theme::new().with_color(ColorKey::Error, "red; } body {").is_err());
/// # Ok::<(), horizon_atomic_css::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    spacing: HashMap<Spacing, String>,
    colors: HashMap<ColorKey, String>,
}

impl Theme {
    /// Create a theme with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the value of a spacing step.
    pub fn with_spacing(mut self, scale: Spacing, value: impl Into<String>) -> Result<Self> {
        self.set_spacing(scale, value)?;
        Ok(self)
    }

    /// Override the value of a color key.
    pub fn with_color(mut self, key: ColorKey, value: impl Into<String>) -> Result<Self> {
        self.set_color(key, value)?;
        Ok(self)
    }

    /// Override the value of a spacing step in place.
    ///
    /// Fails with [`Error::InvalidValue`] if the value could not be emitted
    /// as a single declaration value.
    pub fn set_spacing(&mut self, scale: Spacing, value: impl Into<String>) -> Result<()> {
        let value = checked_value(scale.as_str(), value.into())?;
        self.spacing.insert(scale, value);
        Ok(())
    }

    /// Override the value of a color key in place.
    ///
    /// Fails with [`Error::InvalidValue`] if the value could not be emitted
    /// as a single declaration value.
    pub fn set_color(&mut self, key: ColorKey, value: impl Into<String>) -> Result<()> {
        let value = checked_value(key.as_str(), value.into())?;
        self.colors.insert(key, value);
        Ok(())
    }

    /// Resolved value of a spacing step.
    pub fn spacing(&self, scale: Spacing) -> &str {
        self.spacing
            .get(&scale)
            .map(String::as_str)
            .unwrap_or_else(|| tables::resolve_spacing(scale))
    }

    /// Resolved value of a color key.
    pub fn color(&self, key: ColorKey) -> &str {
        self.colors
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| tables::resolve_color(key))
    }

    /// Whether this theme overrides nothing.
    pub fn is_builtin(&self) -> bool {
        self.spacing.is_empty() && self.colors.is_empty()
    }

    /// CSS value for a shorthand entry, honoring overrides.
    ///
    /// Kind checks and passthrough behave exactly like
    /// [`tables::resolve_value`].
    pub fn resolve_value(&self, key: ShorthandKey, value: &StyleValue) -> Result<String> {
        match (key.value_kind(), value) {
            (ValueKind::Spacing, StyleValue::Spacing(scale)) => Ok(self.spacing(*scale).to_owned()),
            (ValueKind::Color, StyleValue::Color(color)) => Ok(self.color(*color).to_owned()),
            _ => tables::resolve_value(key, value),
        }
    }
}

/// An override must be non-blank and must not end the declaration or rule.
fn checked_value(token: &str, value: String) -> Result<String> {
    if value.trim().is_empty() || value.contains([';', '{', '}']) {
        return Err(Error::invalid_value(token, value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FlexDirection;

    #[test]
    fn default_theme_matches_tables() {
        let theme = Theme::default();
        assert!(theme.is_builtin());
        for scale in Spacing::ALL {
            assert_eq!(theme.spacing(scale), tables::resolve_spacing(scale));
        }
        for key in ColorKey::ALL {
            assert_eq!(theme.color(key), tables::resolve_color(key));
        }
    }

    #[test]
    fn overrides_apply_per_entry() {
        let theme = Theme::new().with_spacing(Spacing::S1, "0.25rem").unwrap();
        assert!(!theme.is_builtin());
        assert_eq!(
            theme.resolve_value(ShorthandKey::M, &Spacing::S1.into()).unwrap(),
            "0.25rem"
        );
        assert_eq!(
            theme.resolve_value(ShorthandKey::M, &Spacing::S2.into()).unwrap(),
            "8px"
        );
    }

    #[test]
    fn overrides_keep_kind_checks() {
        let theme = Theme::new().with_color(ColorKey::Error, "crimson").unwrap();
        let err = theme
            .resolve_value(ShorthandKey::Bg, &FlexDirection::Row.into())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }

    #[test]
    fn blank_override_rejected() {
        for blank in ["", "   "] {
            let err = Theme::new().with_spacing(Spacing::S4, blank).unwrap_err();
            assert!(matches!(err, Error::InvalidValue { ref key, .. } if key == "4"));
        }
    }

    #[test]
    fn override_cannot_escape_declaration() {
        let mut theme = Theme::new();
        for bad in ["red;", "red; } body { x: y", "{", "}"] {
            let err = theme.set_color(ColorKey::Primary, bad).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidValue { ref key, ref value } if key == "primary" && value == bad
            ));
        }
        assert!(theme.is_builtin());
        assert_eq!(theme.color(ColorKey::Primary), "#0070f3");
    }
}
