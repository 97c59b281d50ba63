//! Cached end-offsets of rendered toolbar items.
//!
//! The cache is written once per epoch by geometry capture and read by every
//! fit pass. It is either empty ([`CaptureState::Uncaptured`]) or fully
//! populated ([`CaptureState::Captured`]); it is never partially overwritten.

use crate::geometry::Rect;

/// Whether geometry has been captured for the current epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// The offset cache is empty.
    #[default]
    Uncaptured,
    /// The offset cache holds one offset per rendered item.
    Captured,
}

/// Ordered end-offsets, one per rendered option, relative to the first item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OffsetCache {
    offsets: Vec<f32>,
    epoch: Option<u64>,
}

impl OffsetCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cache holds offsets.
    pub fn is_populated(&self) -> bool {
        !self.offsets.is_empty()
    }

    /// Current capture state.
    pub fn state(&self) -> CaptureState {
        if self.is_populated() {
            CaptureState::Captured
        } else {
            CaptureState::Uncaptured
        }
    }

    /// Store `offsets` if the cache is empty.
    ///
    /// Returns `true` if the offsets were written. A populated cache is left
    /// untouched.
    pub fn populate(&mut self, offsets: Vec<f32>) -> bool {
        if self.is_populated() {
            return false;
        }
        self.offsets = offsets;
        self.is_populated()
    }

    /// Clear all offsets.
    pub fn reset(&mut self) {
        self.offsets.clear();
    }

    /// The cached offsets, in item order.
    pub fn read(&self) -> &[f32] {
        &self.offsets
    }

    /// Number of cached offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Whether every offset is a finite number.
    pub fn is_well_formed(&self) -> bool {
        self.offsets.iter().all(|offset| offset.is_finite())
    }

    /// The epoch the cache belongs to, once one has been assigned.
    pub fn epoch(&self) -> Option<u64> {
        self.epoch
    }

    /// Move the cache to `epoch`, clearing it if the epoch differs.
    ///
    /// Returns `true` if the cache was invalidated.
    pub fn ensure_epoch(&mut self, epoch: u64) -> bool {
        if self.epoch == Some(epoch) {
            return false;
        }
        let had_offsets = self.is_populated();
        self.epoch = Some(epoch);
        self.reset();
        had_offsets
    }
}

/// Compute end-offsets for `rendered` items.
///
/// The first item's left edge is the origin. Each offset is the item's right
/// edge relative to that origin, padded by `min_gap`. Absent or empty input
/// yields an empty sequence.
pub fn measure_offsets(rendered: Option<&[Rect]>, min_gap: f32) -> Vec<f32> {
    let Some(rects) = rendered else {
        return Vec::new();
    };
    let Some(first) = rects.first() else {
        return Vec::new();
    };
    let origin = first.left();
    rects
        .iter()
        .map(|rect| rect.right() - origin + min_gap)
        .collect()
}
