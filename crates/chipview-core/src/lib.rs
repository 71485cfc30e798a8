//! Core systems for chipview.
//!
//! This crate provides the foundational pieces shared by the chipview widgets:
//!
//! - **Signal System**: Type-safe observer notifications used by adapters to
//!   tell containers that their content changed
//! - **Errors**: The error type returned by configuration loading
//! - **Logging**: Tracing targets, span names and a performance span guard
//!
//! # Signal Example
//!
//! ```
//! use chipview_core::Signal;
//!
//! // Create a signal that notifies when content changes
//! let content_changed = Signal::<()>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = content_changed.connect(|_| {
//!     println!("content changed");
//! });
//!
//! // Emit the signal
//! content_changed.emit(());
//!
//! // Disconnect when done
//! content_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Error, Result};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
