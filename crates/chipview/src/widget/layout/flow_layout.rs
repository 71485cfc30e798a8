//! Flow layout for wrapping horizontal arrangement.
//!
//! `FlowLayout` arranges chips from left to right, wrapping to the next line
//! when the available width is exceeded, the way words wrap in a paragraph.
//!
//! The layout is split into two passes that must see the same children:
//!
//! - [`FlowLayout::measure`] decides the line breaks, records one height per
//!   line and returns the container size.
//! - [`FlowLayout::arrange`] replays the same break decisions and converts the
//!   recorded line heights into one rectangle per visible child.
//!
//! Both passes drive a shared `LineCursor`, so the wrap decision is the same
//! predicate in both.

use chipview_core::logging::{span_names, targets};
use chipview_core::PerfSpan;

use crate::geometry::{Rect, Size};

use super::item::MeasuredChild;
use super::{Margins, MeasureSpec};

/// Where a single child ended up after the positioning pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildPlacement {
    /// Final content rectangle (margins excluded), relative to the container.
    pub rect: Rect,
    /// Zero-based line the child was placed on.
    pub line: usize,
}

/// The result of a positioning pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowArrangement {
    /// One entry per child, `None` for hidden children.
    placements: Vec<Option<ChildPlacement>>,
    /// Number of lines the pass walked through.
    line_count: usize,
}

impl FlowArrangement {
    /// Placement of the child at `index`, if it is visible.
    pub fn placement(&self, index: usize) -> Option<&ChildPlacement> {
        self.placements.get(index).and_then(Option::as_ref)
    }

    /// All placements in child order.
    pub fn placements(&self) -> &[Option<ChildPlacement>] {
        &self.placements
    }

    /// Number of lines visited by the positioning pass.
    ///
    /// Always equal to the number of line heights recorded by the
    /// measurement pass over the same children.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Indices of the children placed on `line`, in order.
    pub fn line_members(&self, line: usize) -> Vec<usize> {
        self.placements
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.filter(|p| p.line == line).map(|_| i))
            .collect()
    }
}

/// Running state of the line being filled.
///
/// This is the single source of the wrap decision for both passes.
#[derive(Debug, Clone, Copy)]
struct LineCursor {
    padding_left: f32,
    padding_right: f32,
    /// Container width the lines must fit in.
    width: f32,
    /// Right edge of the last child on the line, padding included.
    line_width: f32,
    /// Tallest outer height seen so far. Not reset on wrap, so a closed
    /// line records the running maximum, including the child that wrapped.
    line_height: f32,
    /// Visible children on the current line.
    members: usize,
}

impl LineCursor {
    fn new(padding: &Margins, width: f32) -> Self {
        Self {
            padding_left: padding.left,
            padding_right: padding.right,
            width,
            line_width: padding.left,
            line_height: 0.0,
            members: 0,
        }
    }

    /// A child wider than the container widens the container.
    fn grow_to(&mut self, outer_width: f32) {
        if outer_width > self.width {
            self.width = outer_width;
        }
    }

    /// Whether a child of `outer_width` must start a new line.
    ///
    /// A child never wraps away from an empty line, so an oversized first
    /// child stays on line 0.
    fn breaks_before(&self, outer_width: f32) -> bool {
        self.members > 0 && self.line_width + outer_width + self.padding_right > self.width
    }

    /// Place a child and return the height of the line it closed, if any.
    fn place(&mut self, outer: Size) -> Option<f32> {
        self.line_height = self.line_height.max(outer.height);

        let closed = if self.breaks_before(outer.width) {
            self.line_width = self.padding_left + outer.width;
            self.members = 0;
            Some(self.line_height)
        } else {
            self.line_width += outer.width;
            None
        };

        self.members += 1;
        closed
    }
}

/// A flow layout that wraps children horizontally.
///
/// # Features
///
/// - Left-to-right, top-to-bottom flow
/// - Per-child margins (chip and line spacing are expressed as margins)
/// - Container padding on all four sides
/// - Hidden children are skipped without affecting line breaks
/// - An oversized child widens the container instead of being clipped
#[derive(Debug, Clone, Default)]
pub struct FlowLayout {
    /// Container padding.
    padding: Margins,
    /// Height of every line from the most recent measurement.
    line_heights: Vec<f32>,
    /// Container size from the most recent measurement.
    measured_size: Size,
    /// Width the measurement started from, before any oversized child grew it.
    initial_width: f32,
    /// Number of children seen by the most recent measurement.
    measured_children: Option<usize>,
}

impl FlowLayout {
    /// Create a new flow layout with no padding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the container padding.
    #[inline]
    pub fn padding(&self) -> Margins {
        self.padding
    }

    /// Set the container padding.
    ///
    /// Invalidates the current measurement.
    pub fn set_padding(&mut self, padding: Margins) {
        if self.padding != padding {
            self.padding = padding;
            self.invalidate();
        }
    }

    /// Line heights recorded by the most recent measurement.
    #[inline]
    pub fn line_heights(&self) -> &[f32] {
        &self.line_heights
    }

    /// Number of lines recorded by the most recent measurement.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_heights.len()
    }

    /// Container size from the most recent measurement.
    #[inline]
    pub fn measured_size(&self) -> Size {
        self.measured_size
    }

    /// Whether the last measurement was taken over `child_count` children.
    pub fn is_measured_for(&self, child_count: usize) -> bool {
        self.measured_children == Some(child_count)
    }

    /// Drop the current measurement.
    pub fn invalidate(&mut self) {
        self.line_heights.clear();
        self.measured_size = Size::ZERO;
        self.initial_width = 0.0;
        self.measured_children = None;
    }

    /// Width of all visible children laid out on a single line.
    fn single_line_width(&self, children: &[MeasuredChild]) -> f32 {
        let content: f32 = children
            .iter()
            .filter(|child| child.visible)
            .fold(self.padding.left, |acc, child| acc + child.outer_size().width);
        content + self.padding.right
    }

    /// Run the measurement pass.
    ///
    /// Decides the line breaks, records the height of each line and returns
    /// the container size. The recorded heights are kept for the following
    /// [`arrange`](Self::arrange) call.
    ///
    /// With [`MeasureSpec::Unspecified`] the width is the single-line width of
    /// the content, so nothing wraps.
    pub fn measure(&mut self, children: &[MeasuredChild], available: MeasureSpec) -> Size {
        let _span = PerfSpan::new(span_names::MEASURE);

        self.line_heights.clear();
        let width = match available.size() {
            Some(width) => width,
            None => self.single_line_width(children),
        };

        self.initial_width = width;
        let mut cursor = LineCursor::new(&self.padding, width);
        let last = children.len().checked_sub(1);

        for (i, child) in children.iter().enumerate() {
            let is_last = Some(i) == last;

            if !child.visible {
                if is_last && cursor.members > 0 {
                    self.line_heights.push(cursor.line_height);
                }
                continue;
            }

            let outer = child.outer_size();
            cursor.grow_to(outer.width);

            if let Some(closed) = cursor.place(outer) {
                tracing::trace!(
                    target: targets::LAYOUT,
                    child = i,
                    line = self.line_heights.len(),
                    height = closed,
                    "line closed"
                );
                self.line_heights.push(closed);
            }

            if is_last {
                self.line_heights.push(cursor.line_height);
            }
        }

        let height = self.padding.vertical() + self.line_heights.iter().sum::<f32>();
        self.measured_size = Size::new(cursor.width, height);
        self.measured_children = Some(children.len());

        tracing::debug!(
            target: targets::LAYOUT,
            children = children.len(),
            lines = self.line_heights.len(),
            width = cursor.width,
            height,
            "measured flow"
        );
        self.measured_size
    }

    /// Run the positioning pass.
    ///
    /// Must follow a [`measure`](Self::measure) call over the same children.
    /// Violating this is a caller bug: debug builds panic, release builds log
    /// a warning and treat missing line heights as zero.
    pub fn arrange(&self, children: &[MeasuredChild]) -> FlowArrangement {
        let _span = PerfSpan::new(span_names::ARRANGE);

        debug_assert!(
            self.is_measured_for(children.len()),
            "arrange called with {} children after measuring {:?}",
            children.len(),
            self.measured_children
        );
        if !self.is_measured_for(children.len()) {
            tracing::warn!(
                target: targets::LAYOUT,
                children = children.len(),
                measured = ?self.measured_children,
                "arranging children that were not measured"
            );
        }

        // Replays measurement from its starting width so every child grows
        // the container at the same point in both passes.
        let mut cursor = LineCursor::new(&self.padding, self.initial_width);
        let mut placements = Vec::with_capacity(children.len());
        let mut line = 0;
        let mut child_y = self.padding.top;
        let mut any_visible = false;

        for child in children {
            if !child.visible {
                placements.push(None);
                continue;
            }

            let outer = child.outer_size();
            cursor.grow_to(outer.width);

            if cursor.place(outer).is_some() {
                child_y += self.recorded_height(line);
                line += 1;
            }
            any_visible = true;

            let child_x = cursor.line_width - outer.width;
            let margins = child.margins;
            let rect = Rect::from_ltrb(
                child_x + margins.left,
                child_y + margins.top,
                cursor.line_width - margins.right,
                child_y + outer.height - margins.bottom,
            );
            placements.push(Some(ChildPlacement { rect, line }));
        }

        let line_count = if any_visible { line + 1 } else { 0 };
        debug_assert_eq!(
            line_count,
            self.line_heights.len(),
            "positioning pass fell out of sync with measurement"
        );

        FlowArrangement {
            placements,
            line_count,
        }
    }

    /// Height recorded for `line`, zero when the measurement is stale.
    fn recorded_height(&self, line: usize) -> f32 {
        match self.line_heights.get(line) {
            Some(height) => *height,
            None => {
                tracing::warn!(target: targets::LAYOUT, line, "no recorded height for line");
                0.0
            }
        }
    }

    /// Height the container needs at the given width.
    ///
    /// Measures a scratch copy, so the stored measurement is untouched.
    pub fn height_for_width(&self, children: &[MeasuredChild], width: f32) -> f32 {
        let mut scratch = self.clone();
        scratch.measure(children, MeasureSpec::Exactly(width)).height
    }
}

// =============================================================================
// Tests
// =============================================================================
