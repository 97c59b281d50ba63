//! Toolbar overflow fitting.
//!
//! This crate decides which entries of a horizontal toolbar fit in the
//! available width and which collapse into an overflow menu, refitting on
//! every viewport resize.
//!
//! - **Geometry capture**: item bounding boxes become cached end-offsets,
//!   once per option epoch ([`OffsetCache`])
//! - **Fit computation**: the longest prefix whose offsets fit, capped by
//!   [`FitterConfig::max_visible`] ([`fit`])
//! - **Resize binding**: a listener on [`Viewport::resized`] that reruns the
//!   fit and publishes the visible subset ([`OverflowFitter`])
//!
//! The rendering layer is reached through the [`WidthSurface`] and
//! [`ItemsSurface`] traits; the overflow menu itself is up to the host.

pub mod cache;
pub mod config;
pub mod error;
pub mod fit;
pub mod fitter;
pub mod geometry;
pub mod option;
pub mod surface;
pub mod validate;
pub mod viewport;

pub use cache::{CaptureState, OffsetCache};
pub use config::FitterConfig;
pub use error::{ConfigError, ConfigResult};
pub use fitter::{OverflowFitter, VisibleSubset};
pub use geometry::{Point, Rect, Size};
pub use option::{OptionSet, ToolOption};
pub use surface::{ItemsSurface, SurfaceSnapshot, WidthSurface};
pub use validate::{Diagnostic, Severity, ValidationReport};
pub use viewport::{ResizeBinding, Viewport};

// Re-export the reactive core types used in this crate's public API
pub use toolbar_overflow_core::{ConnectionId, Property, Signal};
