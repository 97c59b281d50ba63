//! Basic geometry types for measuring rendered toolbar items.
//!
//! Coordinates are logical pixels with the origin at the top-left of the
//! window, matching what a layout engine reports for item bounding boxes.

use serde::{Deserialize, Serialize};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
///
/// This is the bounding box a rendering surface reports for one item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Lay out `widths` left to right starting at `x`, with `spacing` between
    /// consecutive items. All rects share `y` and `height`.
    pub fn row(x: f32, y: f32, height: f32, spacing: f32, widths: &[f32]) -> Vec<Rect> {
        let mut pos = x;
        widths
            .iter()
            .map(|&width| {
                let rect = Rect::new(pos, y, width, height);
                pos += width + spacing;
                rect
            })
            .collect()
    }
}
