//! Logging and debugging facilities for chipview.
//!
//! This module provides:
//! - Integration with the `tracing` crate for structured logging
//! - Stable target names for filtering per subsystem
//! - Performance tracing hooks for profiling layout passes
//!
//! # Tracing Integration
//!
//! chipview uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("chipview::layout=trace"))
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout chipview for tracing.
pub mod span_names {
    /// Measurement pass span.
    pub const MEASURE: &str = "chipview::measure";
    /// Positioning pass span.
    pub const ARRANGE: &str = "chipview::arrange";
    /// Child rebuild span.
    pub const REBUILD: &str = "chipview::rebuild";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "chipview_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "chipview_core::signal";
    /// Adapter content and rendering target.
    pub const ADAPTER: &str = "chipview::adapter";
    /// Flow layout target.
    pub const LAYOUT: &str = "chipview::layout";
    /// Container target.
    pub const VIEW: &str = "chipview::view";
    /// Configuration loading target.
    pub const CONFIG: &str = "chipview::config";
}

/// A guard that keeps a tracing span entered until it is dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "chipview::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        // Just ensure it compiles and doesn't panic
        let _span = PerfSpan::new(span_names::MEASURE);
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::ADAPTER, targets::LAYOUT, targets::VIEW, targets::CONFIG] {
            assert!(target.starts_with("chipview::"));
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
