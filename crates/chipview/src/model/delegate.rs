//! Delegates customize how an adapter turns chips into elements.
//!
//! The adapter owns the content and the style; a [`ChipDelegate`] supplies
//! the per-adapter behavior:
//!
//! - which layout template a position uses (optional, defaults to the style)
//! - one-time setup of a freshly created element
//! - binding a chip's data into an element
//!
//! # Example
//!
//! ```ignore
//! use chipview::model::{ChipDelegate, TextChip, TemplateId};
//!
//! struct AvatarChips;
//!
//! impl ChipDelegate<TextChip, MyElement> for AvatarChips {
//!     fn layout_template(&self, _position: usize) -> Option<TemplateId> {
//!         Some(TemplateId::new("avatar_chip"))
//!     }
//!
//!     fn new_element(&self, element: &mut MyElement) {
//!         element.set_close_button(true);
//!     }
//!
//!     fn bind_element(&self, element: &mut MyElement, chip: &TextChip, _position: usize) {
//!         element.set_label(chip.label());
//!     }
//! }
//! ```

use super::chip::Chip;
use super::style::TemplateId;
use crate::widget::ChipElement;

/// Per-adapter hooks used while rendering a chip.
pub trait ChipDelegate<C: Chip, E>: Send + Sync {
    /// Layout template for the chip at `position`.
    ///
    /// `None` falls back to the adapter's style template, then to the
    /// default chip visual.
    fn layout_template(&self, _position: usize) -> Option<TemplateId> {
        None
    }

    /// Called once on every newly created element, before binding.
    fn new_element(&self, element: &mut E);

    /// Bind the chip at `position` into `element`.
    fn bind_element(&self, element: &mut E, chip: &C, position: usize);
}

/// Delegate used when none is supplied: shows the chip label.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultChipDelegate;

impl<C: Chip, E: ChipElement> ChipDelegate<C, E> for DefaultChipDelegate {
    fn new_element(&self, _element: &mut E) {}

    fn bind_element(&self, element: &mut E, chip: &C, _position: usize) {
        element.set_label(chip.label());
    }
}
