//! Measured children consumed by the flow layout.

use crate::geometry::Size;

use super::Margins;

/// A child as seen by the flow layout.
///
/// Holds the intrinsic size reported by the host after measurement, the
/// child's margins and whether it takes part in layout. Rebuilt on every
/// pass; the layout never keeps references to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredChild {
    /// Intrinsic content size.
    pub size: Size,
    /// Margins around the content.
    pub margins: Margins,
    /// Hidden children are skipped by both passes.
    pub visible: bool,
}

impl MeasuredChild {
    /// Create a visible child.
    pub fn new(size: Size, margins: Margins) -> Self {
        Self {
            size,
            margins,
            visible: true,
        }
    }

    /// Create a hidden child.
    pub fn hidden(size: Size, margins: Margins) -> Self {
        Self {
            visible: false,
            ..Self::new(size, margins)
        }
    }

    /// Intrinsic size plus margins on all sides.
    #[inline]
    pub fn outer_size(&self) -> Size {
        Size::new(
            self.size.width + self.margins.horizontal(),
            self.size.height + self.margins.vertical(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_size_includes_margins() {
        let child = MeasuredChild::new(Size::new(80.0, 24.0), Margins::new(2.0, 1.0, 8.0, 4.0));
        assert_eq!(child.outer_size(), Size::new(90.0, 29.0));
        assert!(child.visible);
        assert!(!MeasuredChild::hidden(Size::ZERO, Margins::ZERO).visible);
    }
}
