//! Prelude module for chipview.
//!
//! ```ignore
//! use chipview::prelude::*;
//! ```

// ============================================================================
// Content
// ============================================================================

pub use crate::model::{Chip, ChipAdapter, ChipDelegate, ChipStyle, TemplateId, TextChip};

// ============================================================================
// Container and Host Contract
// ============================================================================

pub use crate::widget::headless::{HeadlessElement, HeadlessFactory};
pub use crate::widget::{ChipElement, ChipView, ElementFactory};

// ============================================================================
// Layout and Geometry
// ============================================================================

pub use crate::geometry::{Color, Point, Rect, Size};
pub use crate::widget::layout::{Margins, MeasureSpec};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::ChipViewConfig;
pub use chipview_core::{ConnectionId, Error, Signal};
