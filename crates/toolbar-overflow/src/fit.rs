//! The fit computation.
//!
//! Given cached end-offsets and an available width, these functions decide
//! how many leading options stay in the toolbar. They are pure; the
//! [`OverflowFitter`](crate::OverflowFitter) wires them to its state.

use crate::option::ToolOption;

/// Whether a child-bearing option already overflows `width`.
///
/// True if any option with children has a cached offset
/// `>= width - min_gap`. Options without a cached offset never count as
/// overflowed, so an empty cache yields `false`.
pub fn is_overflowed_by_child(
    options: &[ToolOption],
    offsets: &[f32],
    width: f32,
    min_gap: f32,
) -> bool {
    let limit = width - min_gap;
    options
        .iter()
        .zip(offsets)
        .any(|(option, &offset)| option.has_children() && offset >= limit)
}

/// Number of cached offsets that fit within `width - min_gap`.
pub fn fitting_count(offsets: &[f32], width: f32, min_gap: f32) -> usize {
    let limit = width - min_gap;
    offsets.iter().filter(|&&offset| offset <= limit).count()
}

/// Length of the visible prefix: the fitting count truncated to the visible
/// limit and the number of options.
pub fn visible_count(fitting: usize, visible_limit: usize, option_count: usize) -> usize {
    fitting.min(visible_limit).min(option_count)
}
