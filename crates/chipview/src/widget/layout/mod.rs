//! Flow layout for wrapping chips across lines.
//!
//! This module provides the layout engine used by [`ChipView`](crate::widget::ChipView):
//!
//! - [`FlowLayout`]: The two-pass line-wrapping algorithm
//! - [`MeasuredChild`]: One already-measured child with its margins and visibility
//! - [`Margins`]: Spacing around a box (container padding or child margins)
//! - [`MeasureSpec`]: How much width the host offers during measurement
//!
//! # Layout Algorithm
//!
//! The layout runs in two passes over the same ordered children:
//!
//! 1. **Measurement pass**: Walk the children left to right, decide where each
//!    line breaks, record the height of every line and compute the container's
//!    total size.
//! 2. **Positioning pass**: Walk the same children again with the same break
//!    decision and turn the recorded line heights into a rectangle per child.
//!
//! The positioning pass relies on the line heights of the most recent
//! measurement, so it must run on the same generation of children.
//!
//! # Example
//!
//! ```
//! use chipview::geometry::Size;
//! use chipview::widget::layout::{FlowLayout, Margins, MeasureSpec, MeasuredChild};
//!
//! let children: Vec<_> = (0..4)
//!     .map(|_| MeasuredChild::new(Size::new(100.0, 30.0), Margins::ZERO))
//!     .collect();
//!
//! let mut layout = FlowLayout::new();
//! layout.set_padding(Margins::uniform(10.0));
//!
//! let size = layout.measure(&children, MeasureSpec::Exactly(300.0));
//! assert_eq!(layout.line_heights(), &[30.0, 30.0]);
//! assert_eq!(size.height, 80.0);
//!
//! let arrangement = layout.arrange(&children);
//! assert_eq!(arrangement.line_count(), 2);
//! ```

mod flow_layout;
mod item;

pub use flow_layout::{ChildPlacement, FlowArrangement, FlowLayout};
pub use item::MeasuredChild;

use serde::{Deserialize, Serialize};

/// Spacing around a box.
///
/// Used both for the padding of the chip container and for the margins of
/// each child.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    /// Left margin.
    pub left: f32,
    /// Top margin.
    pub top: f32,
    /// Right margin.
    pub right: f32,
    /// Bottom margin.
    pub bottom: f32,
}

impl Margins {
    /// No spacing on any side.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create new margins.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create uniform margins (same value on all sides).
    pub const fn uniform(margin: f32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Create symmetric margins (same horizontal and vertical).
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Total horizontal margin (left + right).
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical margin (top + bottom).
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// The width constraint offered by the host during measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The container must be exactly this wide (it may still grow for an
    /// oversized child).
    Exactly(f32),
    /// The container may be at most this wide.
    AtMost(f32),
    /// No constraint; the width is computed from the content.
    Unspecified,
}

impl MeasureSpec {
    /// The offered width, if any.
    pub fn size(&self) -> Option<f32> {
        match *self {
            Self::Exactly(width) | Self::AtMost(width) => Some(width),
            Self::Unspecified => None,
        }
    }

    /// Shrink the offered width by `amount`, clamping at zero.
    ///
    /// Used to derive the constraint handed to children from the container's.
    pub fn shrink(&self, amount: f32) -> Self {
        match *self {
            Self::Exactly(width) | Self::AtMost(width) => Self::AtMost((width - amount).max(0.0)),
            Self::Unspecified => Self::Unspecified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins_totals() {
        let margins = Margins::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(margins.horizontal(), 4.0);
        assert_eq!(margins.vertical(), 6.0);
        assert_eq!(Margins::symmetric(5.0, 2.0), Margins::new(5.0, 2.0, 5.0, 2.0));
    }

    #[test]
    fn test_measure_spec_shrink() {
        assert_eq!(MeasureSpec::Exactly(300.0).shrink(20.0), MeasureSpec::AtMost(280.0));
        assert_eq!(MeasureSpec::AtMost(10.0).shrink(20.0), MeasureSpec::AtMost(0.0));
        assert_eq!(MeasureSpec::Unspecified.shrink(20.0), MeasureSpec::Unspecified);
        assert_eq!(MeasureSpec::Unspecified.size(), None);
    }
}
