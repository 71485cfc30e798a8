//! chipview - wrapping chip containers.
//!
//! A chip is a small labelled item such as a tag, a contact or a filter.
//! This crate keeps a list of chips in a [`ChipAdapter`](model::ChipAdapter),
//! turns each one into a host element and flows the elements left to right,
//! wrapping into new lines when the container width runs out.
//!
//! The crate never draws. A host framework implements
//! [`ChipElement`](widget::ChipElement) and
//! [`ElementFactory`](widget::ElementFactory); the
//! [`headless`](widget::headless) backend implements both with fixed text
//! metrics.
//!
//! # Example
//!
//! ```
//! use chipview::prelude::*;
//!
//! let view: ChipView<TextChip, HeadlessFactory> = ChipView::new(HeadlessFactory::new());
//! for tag in ["rust", "gui", "layout", "flow", "chips"] {
//!     view.add(TextChip::new(tag));
//! }
//!
//! let size = view.measure(MeasureSpec::AtMost(120.0));
//! view.layout();
//!
//! assert!(view.line_heights().len() > 1);
//! assert!(size.width <= 120.0);
//! ```

pub mod config;
pub mod geometry;
pub mod model;
pub mod prelude;
pub mod widget;

pub use chipview_core::{ConnectionId, Error, Result, Signal};
