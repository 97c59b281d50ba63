//! Measurement seams to the rendering layer.
//!
//! The fitter never lays anything out itself. It asks the host's rendering
//! layer for two things: the width of the toolbar wrapper and the bounding
//! boxes of the rendered items. Either may be unavailable (not yet laid out,
//! or not bound at all).

use parking_lot::RwLock;

use crate::geometry::Rect;

/// A rendered surface whose width bounds the toolbar.
pub trait WidthSurface: Send + Sync {
    /// Current width in logical pixels, or `None` if not laid out.
    fn width(&self) -> Option<f32>;
}

/// The container holding one rendered child per toolbar option.
pub trait ItemsSurface: Send + Sync {
    /// Bounding boxes of the rendered children in option order, or `None`
    /// if the children are not rendered yet.
    fn item_bounds(&self) -> Option<Vec<Rect>>;
}

/// A headless surface holding the last measured geometry.
///
/// Hosts without a live layout engine push measurements into it; it
/// implements both [`WidthSurface`] and [`ItemsSurface`].
///
/// # Example
///
/// ```
/// use toolbar_overflow::{ItemsSurface, Rect, SurfaceSnapshot, WidthSurface};
///
/// let surface = SurfaceSnapshot::new();
/// assert_eq!(surface.width(), None);
///
/// surface.set_bounds(Rect::new(0.0, 0.0, 640.0, 32.0));
/// surface.set_item_bounds(Rect::row(0.0, 0.0, 32.0, 4.0, &[60.0, 60.0]));
/// assert_eq!(surface.width(), Some(640.0));
/// assert_eq!(surface.item_bounds().map(|r| r.len()), Some(2));
/// ```
#[derive(Debug, Default)]
pub struct SurfaceSnapshot {
    bounds: RwLock<Option<Rect>>,
    items: RwLock<Option<Vec<Rect>>>,
}

impl SurfaceSnapshot {
    /// Create a snapshot with no measurements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the surface's own bounding box.
    pub fn set_bounds(&self, bounds: Rect) {
        *self.bounds.write() = Some(bounds);
    }

    /// Record the bounding boxes of the rendered children.
    pub fn set_item_bounds(&self, items: Vec<Rect>) {
        *self.items.write() = Some(items);
    }

    /// Forget all measurements, as after the surface is detached.
    pub fn clear(&self) {
        *self.bounds.write() = None;
        *self.items.write() = None;
    }
}

impl WidthSurface for SurfaceSnapshot {
    fn width(&self) -> Option<f32> {
        self.bounds.read().map(|rect| rect.width())
    }
}

impl ItemsSurface for SurfaceSnapshot {
    fn item_bounds(&self) -> Option<Vec<Rect>> {
        self.items.read().clone()
    }
}
