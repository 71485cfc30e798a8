//! Visual style parameters held by a chip adapter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Color;
use crate::widget::layout::Margins;

/// Identifies a host-defined chip layout template.
///
/// The adapter never interprets the identifier; it is handed to
/// [`ElementFactory::inflate`](crate::widget::ElementFactory::inflate).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    /// Create a template identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The template name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TemplateId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Style configuration for the chips of one adapter.
///
/// Only `chip_spacing` and `line_spacing` reach the layout, as the default
/// right and bottom margins of every chip. The rest describes the default
/// chip visual. Values are used verbatim; nothing is validated or clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChipStyle {
    /// Horizontal gap after each chip.
    pub chip_spacing: f32,
    /// Vertical gap below each chip.
    pub line_spacing: f32,
    /// Padding above and below the chip label.
    pub chip_padding: f32,
    /// Padding left and right of the chip label.
    pub chip_side_padding: f32,
    /// Corner radius of the chip background.
    pub chip_corner_radius: f32,
    /// Label text size.
    pub chip_text_size: f32,
    /// Chip background.
    pub chip_background: Color,
    /// Chip background while pressed or selected.
    pub chip_background_selected: Color,
    /// Layout template for every chip; `None` uses the default visual.
    pub chip_template: Option<TemplateId>,
}

impl Default for ChipStyle {
    fn default() -> Self {
        Self {
            chip_spacing: 6.0,
            line_spacing: 6.0,
            chip_padding: 4.0,
            chip_side_padding: 10.0,
            chip_corner_radius: 12.0,
            chip_text_size: 14.0,
            chip_background: Color::from_rgb8(0xE0, 0xE0, 0xE0),
            chip_background_selected: Color::from_rgb8(0xBD, 0xBD, 0xBD),
            chip_template: None,
        }
    }
}

impl ChipStyle {
    /// Margins given to a chip whose template does not define its own.
    pub fn default_margins(&self) -> Margins {
        Margins::new(0.0, 0.0, self.chip_spacing, self.line_spacing)
    }

    /// Describe the default chip visual for this style.
    pub fn default_visual(&self) -> DefaultChipVisual {
        DefaultChipVisual {
            padding: Margins::symmetric(self.chip_side_padding, self.chip_padding),
            corner_radius: self.chip_corner_radius,
            text_size: self.chip_text_size,
            background: self.chip_background,
            background_selected: self.chip_background_selected,
        }
    }
}

/// Everything a host needs to build the default chip: a single text label
/// in a horizontal, vertically centered row on a rounded background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultChipVisual {
    /// Padding between the background edge and the label.
    pub padding: Margins,
    /// Corner radius of the background.
    pub corner_radius: f32,
    /// Label text size.
    pub text_size: f32,
    /// Background color.
    pub background: Color,
    /// Background color while pressed or selected.
    pub background_selected: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_margins_follow_spacing() {
        let style = ChipStyle {
            chip_spacing: 8.0,
            line_spacing: 3.0,
            ..Default::default()
        };
        assert_eq!(style.default_margins(), Margins::new(0.0, 0.0, 8.0, 3.0));
    }

    #[test]
    fn test_default_visual_padding() {
        let style = ChipStyle::default();
        let visual = style.default_visual();
        assert_eq!(visual.padding.left, style.chip_side_padding);
        assert_eq!(visual.padding.top, style.chip_padding);
        assert_eq!(visual.text_size, style.chip_text_size);
    }

    #[test]
    fn test_negative_spacing_passes_through() {
        let style = ChipStyle {
            chip_spacing: -4.0,
            ..Default::default()
        };
        assert_eq!(style.default_margins().right, -4.0);
    }
}
