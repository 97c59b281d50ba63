//! Reactive core for toolbar overflow.
//!
//! This crate provides the building blocks the overflow fitter is wired with:
//!
//! - **Signal/Slot System**: Type-safe notification of resize events and
//!   visible-subset changes
//! - **Property System**: Values with change detection
//! - **Logging**: `tracing` targets, span names and a perf span guard
//!
//! # Example
//!
//! ```
//! use toolbar_overflow_core::{Property, Signal};
//!
//! let visible = Property::new(Vec::<String>::new());
//! let visible_changed = Signal::<Vec<String>>::new();
//!
//! visible_changed.connect(|labels| println!("showing {} items", labels.len()));
//!
//! let next = vec!["Open".to_string(), "Save".to_string()];
//! if visible.set(next.clone()) {
//!     visible_changed.emit(next);
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionId, Signal};

static_assertions::assert_impl_all!(Signal<f32>: Send, Sync);
static_assertions::assert_impl_all!(Property<Vec<f32>>: Send, Sync);
