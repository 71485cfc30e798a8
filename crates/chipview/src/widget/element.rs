//! The host-framework contract consumed by chip views.
//!
//! chipview does not draw anything itself. A host framework provides
//! elements that can be measured, given margins and placed, and a factory
//! that creates them either from a named template or as the default chip
//! visual.

use crate::geometry::{Rect, Size};
use crate::model::{ChipStyle, DefaultChipVisual, TemplateId};

use super::layout::{Margins, MeasureSpec};

/// A visual element representing one chip.
pub trait ChipElement: Send + 'static {
    /// Measure the element's intrinsic size under `spec`.
    fn measure(&mut self, spec: MeasureSpec);

    /// Size computed by the last [`measure`](Self::measure) call.
    fn measured_size(&self) -> Size;

    /// Current margins.
    fn margins(&self) -> Margins;

    /// Replace the margins.
    fn set_margins(&mut self, margins: Margins);

    /// Hidden elements take no space and get no rectangle.
    fn is_visible(&self) -> bool {
        true
    }

    /// Place the element's content box, relative to the chip view.
    fn set_geometry(&mut self, rect: Rect);

    /// Make the element clickable and focusable.
    fn set_interactive(&mut self, _interactive: bool) {}

    /// Set the text label, if the element shows one.
    fn set_label(&mut self, _label: &str) {}
}

/// Creates chip elements for a host framework.
pub trait ElementFactory: Send + Sync {
    /// The element type this factory produces.
    type Element: ChipElement;

    /// Build the default chip visual: a text label in a rounded row.
    fn create_default(&self, visual: &DefaultChipVisual) -> Self::Element;

    /// Build an element from a host-defined template.
    ///
    /// Margins defined by the template are reported through
    /// [`ChipElement::margins`]; the adapter fills in unset ones.
    fn inflate(&self, template: &TemplateId, style: &ChipStyle) -> Self::Element;
}
