//! Loading chip view settings from TOML.
//!
//! ```toml
//! tolerating_duplicates = false
//!
//! [style]
//! chip_spacing = 8.0
//! line_spacing = 4.0
//! chip_background = "#E3F2FD"
//! chip_template = "avatar_chip"
//!
//! [padding]
//! left = 12.0
//! right = 12.0
//! ```
//!
//! Every field is optional and falls back to its default.

use std::path::Path;

use chipview_core::logging::targets;
use chipview_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Chip, ChipAdapter, ChipStyle};
use crate::widget::ChipElement;
use crate::widget::layout::Margins;

/// Settings for one chip view and its adapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChipViewConfig {
    /// Whether chips with equal identity may coexist.
    pub tolerating_duplicates: bool,
    /// Adapter style.
    pub style: ChipStyle,
    /// Container padding.
    pub padding: Margins,
}

impl ChipViewConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::parse(e.to_string()))
    }

    /// Write the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|e| Error::io(path, e))
    }

    /// Copy the style and duplicate tolerance into `adapter`.
    ///
    /// Like any style change, this does not notify subscribers.
    pub fn apply<C: Chip, E: ChipElement>(&self, adapter: &ChipAdapter<C, E>) {
        adapter.set_style(self.style.clone());
        adapter.set_tolerating_duplicates(self.tolerating_duplicates);
    }

    /// Reject numbers that cannot take part in layout.
    ///
    /// Negative values pass through untouched; only NaN and infinities are
    /// rejected.
    fn validate(&self) -> Result<()> {
        let numbers = [
            ("style.chip_spacing", self.style.chip_spacing),
            ("style.line_spacing", self.style.line_spacing),
            ("style.chip_padding", self.style.chip_padding),
            ("style.chip_side_padding", self.style.chip_side_padding),
            ("style.chip_corner_radius", self.style.chip_corner_radius),
            ("style.chip_text_size", self.style.chip_text_size),
            ("padding.left", self.padding.left),
            ("padding.top", self.padding.top),
            ("padding.right", self.padding.right),
            ("padding.bottom", self.padding.bottom),
        ];

        match numbers.iter().find(|(_, value)| !value.is_finite()) {
            Some((property, value)) => Err(Error::invalid_value(
                *property,
                format!("expected a finite number, got {value}"),
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Color;
    use crate::model::{TemplateId, TextChip};
    use crate::widget::headless::HeadlessElement;

    #[test]
    fn test_empty_config_is_default() {
        let config = ChipViewConfig::from_toml_str("").unwrap();
        assert_eq!(config, ChipViewConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = ChipViewConfig::from_toml_str(
            r##"
            tolerating_duplicates = true

            [style]
            chip_spacing = 8.0
            chip_background = "#102030"
            chip_template = "avatar_chip"

            [padding]
            left = 12.0
            "##,
        )
        .unwrap();

        assert!(config.tolerating_duplicates);
        assert_eq!(config.style.chip_spacing, 8.0);
        assert_eq!(config.style.line_spacing, ChipStyle::default().line_spacing);
        assert_eq!(config.style.chip_background, Color::from_rgb8(0x10, 0x20, 0x30));
        assert_eq!(config.style.chip_template, Some(TemplateId::new("avatar_chip")));
        assert_eq!(config.padding, Margins::new(12.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_bad_color_is_parse_error() {
        let err = ChipViewConfig::from_toml_str("[style]\nchip_background = \"blue\"").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let err = ChipViewConfig::from_toml_str("[style]\nline_spacing = nan").unwrap_err();
        match err {
            Error::InvalidValue { property, .. } => assert_eq!(property, "style.line_spacing"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_values_accepted() {
        let config = ChipViewConfig::from_toml_str("[style]\nchip_spacing = -2.0").unwrap();
        assert_eq!(config.style.chip_spacing, -2.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chips.toml");

        let mut config = ChipViewConfig::default();
        config.style.chip_text_size = 18.0;
        config.style.chip_template = Some(TemplateId::new("pill"));
        config.padding = Margins::uniform(4.0);
        config.save(&path).unwrap();

        assert_eq!(ChipViewConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChipViewConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_apply_does_not_notify() {
        let adapter = ChipAdapter::<TextChip, HeadlessElement>::new();
        let notified = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = notified.clone();
        adapter.subscribe(move || flag.store(true, std::sync::atomic::Ordering::SeqCst));

        let mut config = ChipViewConfig::default();
        config.style.chip_spacing = 11.0;
        config.tolerating_duplicates = true;
        config.apply(&adapter);

        assert_eq!(adapter.chip_spacing(), 11.0);
        assert!(adapter.is_tolerating_duplicates());
        assert!(!notified.load(std::sync::atomic::Ordering::SeqCst));
    }
}
