//! Logging facilities for toolbar overflow.
//!
//! Everything in this workspace is instrumented with the `tracing` crate. To
//! see the output, install a subscriber in the host application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("toolbar_overflow=debug")
//!         .init();
//! }
//! ```
//!
//! Validation diagnostics are logged at `warn`/`error` under
//! [`targets::VALIDATE`], fit passes at `debug`/`trace` under [`targets::FIT`].
//! Core plumbing logs through the [`overflow_trace!`](crate::overflow_trace)
//! family under [`targets::CORE`].

/// Span names used throughout toolbar overflow for tracing.
pub mod span_names {
    /// Geometry capture span.
    pub const CAPTURE: &str = "toolbar_overflow::capture";
    /// Fit computation span.
    pub const FIT: &str = "toolbar_overflow::fit";
    /// Resize handling span.
    pub const RESIZE: &str = "toolbar_overflow::resize";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core target (signal/slot plumbing).
    pub const CORE: &str = "toolbar_overflow_core";
    /// Geometry capture target.
    pub const CAPTURE: &str = "toolbar_overflow::capture";
    /// Fit computation target.
    pub const FIT: &str = "toolbar_overflow::fit";
    /// Viewport and resize binding target.
    pub const RESIZE: &str = "toolbar_overflow::resize";
    /// Validation diagnostics target.
    pub const VALIDATE: &str = "toolbar_overflow::validate";
    /// Configuration loading target.
    pub const CONFIG: &str = "toolbar_overflow::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time capture and fit passes.
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
        let span = tracing::info_span!(target: "toolbar_overflow::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros that log under
/// [`targets::CORE`].
#[macro_export]
macro_rules! overflow_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! overflow_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! overflow_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! overflow_error {
    ($($arg:tt)*) => {
        tracing::error!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}
