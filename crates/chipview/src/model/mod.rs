//! Chip content and how it becomes elements.
//!
//! - [`Chip`]: the item type, with an identity and a label
//! - [`ChipAdapter`]: owns the chips and the style, notifies on change
//! - [`ChipDelegate`]: per-adapter element hooks
//! - [`ChipStyle`]: spacing and default-visual parameters

mod adapter;
mod chip;
mod delegate;
mod style;

pub use adapter::ChipAdapter;
pub use chip::{Chip, TextChip};
pub use delegate::{ChipDelegate, DefaultChipDelegate};
pub use style::{ChipStyle, DefaultChipVisual, TemplateId};
