//! Loading themes from TOML.
//!
//! ```toml
//! [spacing]
//! 4 = "1rem"
//!
//! [colors]
//! primary = "#1d4ed8"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::Theme;
use crate::types::{ColorKey, Spacing};
use crate::{Error, Result};

/// On-disk form of a theme. Keys stay strings until validated.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    spacing: BTreeMap<String, String>,
    colors: BTreeMap<String, String>,
}

impl Theme {
    /// Parse a theme from TOML text.
    ///
    /// Both tables are optional. Keys outside the spacing scale or the color
    /// set are rejected, as are blank values and values containing `;`, `{`
    /// or `}`.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(source)?;
        let mut theme = Theme::new();

        for (step, value) in file.spacing {
            let scale: Spacing = step.parse()?;
            theme.set_spacing(scale, value)?;
        }
        for (name, value) in file.colors {
            let key: ColorKey = name.parse()?;
            theme.set_color(key, value)?;
        }

        Ok(theme)
    }

    /// Load a theme from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let theme = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded theme from {}", path.display());
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_spacing_and_colors() {
        let theme = Theme::from_toml_str(
            r##"
            [spacing]
            4 = "1rem"
            10 = "4rem"

            [colors]
            primary = "#1d4ed8"
            "##,
        )
        .unwrap();

        assert_eq!(theme.spacing(Spacing::S4), "1rem");
        assert_eq!(theme.spacing(Spacing::S10), "4rem");
        assert_eq!(theme.spacing(Spacing::S5), "24px");
        assert_eq!(theme.color(ColorKey::Primary), "#1d4ed8");
        assert_eq!(theme.color(ColorKey::Error), "#ef4444");
    }

    #[test]
    fn empty_source_is_builtin() {
        assert!(Theme::from_toml_str("").unwrap().is_builtin());
    }

    #[test]
    fn unknown_spacing_step_rejected() {
        let err = Theme::from_toml_str("[spacing]\n7 = \"28px\"\n").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref value, .. } if value == "7"));
    }

    #[test]
    fn unknown_color_rejected() {
        let err = Theme::from_toml_str("[colors]\naccent = \"pink\"\n").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref value, .. } if value == "accent"));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = Theme::from_toml_str("[spacing\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = Theme::from_toml_str("[fonts]\nbody = \"serif\"\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[colors]\nneutral = \"slategray\"").unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.color(ColorKey::Neutral), "slategray");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Theme::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn malformed_override_values_rejected() {
        let err = Theme::from_toml_str("[spacing]\n4 = \"\"\n").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref key, .. } if key == "4"));

        let err = Theme::from_toml_str("[colors]\nprimary = \"red; } body { x: y\"\n").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValue { ref key, ref value } if key == "primary" && value == "red; } body { x: y"
        ));
    }
}
