//! The chip container and its host contract.
//!
//! - [`ChipView`]: observes an adapter and lays its chips out in lines
//! - [`ChipElement`] / [`ElementFactory`]: what a host framework provides
//! - [`layout`]: the flow layout engine
//! - [`headless`]: an element backend that only computes geometry

mod chip_view;
mod element;
pub mod headless;
pub mod layout;

pub use chip_view::ChipView;
pub use element::{ChipElement, ElementFactory};
