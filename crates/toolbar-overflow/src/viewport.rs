//! The viewport resize signal and the binding that listens to it.
//!
//! [`Viewport`] tracks the window's logical width and re-emits every resize as
//! [`Viewport::resized`]. Events are not debounced or coalesced: each
//! `Resized` window event produces exactly one emission.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use toolbar_overflow::{ResizeBinding, Viewport};
//!
//! let viewport = Arc::new(Viewport::new(800.0));
//! let binding = ResizeBinding::connect(&viewport, |width| {
//!     println!("refit at {width}px");
//! });
//!
//! viewport.resize(640.0);
//! drop(binding); // listener removed
//! assert_eq!(viewport.resized.connection_count(), 0);
//! ```

use std::sync::{Arc, Weak};

use toolbar_overflow_core::logging::targets;
use toolbar_overflow_core::{ConnectionId, Property, Signal};
use winit::event::WindowEvent;

/// The window-level size source for toolbar fitting.
pub struct Viewport {
    /// Logical width in pixels.
    width: Property<f32>,
    /// Physical-to-logical pixel ratio.
    scale_factor: Property<f64>,
    /// Signal emitted with the logical width on every resize.
    pub resized: Signal<f32>,
}

impl Viewport {
    /// Create a viewport with the given logical width and a scale factor of 1.
    pub fn new(width: f32) -> Self {
        Self {
            width: Property::new(width),
            scale_factor: Property::new(1.0),
            resized: Signal::new(),
        }
    }

    /// Current logical width.
    pub fn width(&self) -> f32 {
        self.width.get()
    }

    /// Current scale factor.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor.get()
    }

    /// Record a new logical width and emit [`resized`](Self::resized).
    ///
    /// Emits even when the width is unchanged.
    pub fn resize(&self, width: f32) {
        self.width.set_silent(width);
        let listeners = self.resized.emit(width);
        tracing::trace!(target: targets::RESIZE, width, listeners, "viewport resized");
    }

    /// Feed a window event into the viewport.
    ///
    /// `Resized` converts the physical size to logical pixels and calls
    /// [`resize`](Self::resize). `ScaleFactorChanged` updates the scale
    /// factor; the window follows up with its own `Resized`. Returns `true`
    /// if the event was consumed.
    pub fn handle_window_event(&self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Resized(size) => {
                let logical = size.to_logical::<f64>(self.scale_factor());
                self.resize(logical.width as f32);
                true
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if self.scale_factor.set(*scale_factor) {
                    tracing::debug!(target: targets::RESIZE, scale_factor, "scale factor changed");
                }
                true
            }
            _ => false,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("width", &self.width())
            .field("scale_factor", &self.scale_factor())
            .field("listeners", &self.resized.connection_count())
            .finish()
    }
}

/// A live listener on [`Viewport::resized`].
///
/// The listener is removed when the binding is dropped or
/// [`disconnect`](Self::disconnect)ed. The binding does not keep the
/// viewport alive.
#[derive(Debug)]
pub struct ResizeBinding {
    viewport: Weak<Viewport>,
    id: ConnectionId,
}

impl ResizeBinding {
    /// Connect `slot` to the viewport's resize signal.
    pub fn connect<F>(viewport: &Arc<Viewport>, slot: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        let id = viewport.resized.connect(move |&width| slot(width));
        tracing::debug!(target: targets::RESIZE, "resize listener bound");
        Self {
            viewport: Arc::downgrade(viewport),
            id,
        }
    }

    /// Whether the listener is still attached to a live viewport.
    pub fn is_connected(&self) -> bool {
        self.viewport
            .upgrade()
            .is_some_and(|viewport| viewport.resized.is_connected(self.id))
    }

    /// Remove the listener now.
    pub fn disconnect(self) {
        drop(self);
    }
}

impl Drop for ResizeBinding {
    fn drop(&mut self) {
        if let Some(viewport) = self.viewport.upgrade() {
            if viewport.resized.disconnect(self.id) {
                tracing::debug!(target: targets::RESIZE, "resize listener removed");
            }
        }
    }
}
