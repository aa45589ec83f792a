// Drop resolution
//
// Pure helpers that turn "what is under the pointer" into a new date and time:
// - Date: nearest date marker within a few nodes of the drop target
// - Time: vertical offset inside a time-grid cell mapped onto the event's span

use chrono::NaiveDate;
use egui::{Pos2, Rect};

use super::tree::DropNode;
use crate::models::event::Event;
use crate::utils::time::ClockTime;

/// Number of nodes inspected when looking for a date marker: the target
/// itself plus its two nearest ancestors.
pub const DATE_SEARCH_DEPTH: usize = 3;

/// Find the date marker nearest to `node`, looking at no more than
/// [`DATE_SEARCH_DEPTH`] nodes.
pub fn resolve_drop_date<N: DropNode>(node: Option<N>) -> Option<NaiveDate> {
    resolve_drop_date_within(node, DATE_SEARCH_DEPTH)
}

/// Same as [`resolve_drop_date`] with an explicit search depth.
pub fn resolve_drop_date_within<N: DropNode>(node: Option<N>, depth: usize) -> Option<NaiveDate> {
    let mut current = node;
    for _ in 0..depth {
        let node = current?;
        if let Some(date) = node.date_marker() {
            return Some(date);
        }
        current = node.parent();
    }
    None
}

/// Whether a drop onto `node` may reschedule an event.
///
/// Event boxes are rejected before the date lookup, so dropping onto another
/// event never inherits the date of the cell it sits in.
pub fn is_valid_drop_target<N: DropNode>(node: Option<N>) -> bool {
    is_valid_drop_target_within(node, DATE_SEARCH_DEPTH)
}

pub fn is_valid_drop_target_within<N: DropNode>(node: Option<N>, depth: usize) -> bool {
    match node {
        None => false,
        Some(node) if node.is_event_box() => false,
        Some(node) => resolve_drop_date_within(Some(node), depth).is_some(),
    }
}

/// The dropped date, or the event's own date when none could be resolved.
pub fn compute_new_date(event: &Event, dropped: Option<NaiveDate>) -> NaiveDate {
    dropped.unwrap_or(event.date)
}

/// Map a vertical offset inside a time-grid cell onto the span `start..=end`.
///
/// The offset ratio is clamped to the cell, so drops above or below it
/// saturate to `start` or `end`. A cell without a usable height maps to
/// `start`. The result is rounded to the nearest minute, halves rounding up.
pub fn compute_new_time(
    drop_offset_y: f32,
    cell_height: f32,
    start: ClockTime,
    end: ClockTime,
) -> ClockTime {
    let (offset, height) = (f64::from(drop_offset_y), f64::from(cell_height));
    let ratio = if height > 0.0 && height.is_finite() && !offset.is_nan() {
        (offset / height).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let range = end.minutes_since(start) as f64;
    let total = (f64::from(start.minutes()) + range * ratio + 0.5).floor();
    ClockTime::from_minutes(total.max(0.0) as u32)
}

/// New end time that keeps the original duration after the start moved to `new_start`.
pub fn shift_end_time(
    new_start: ClockTime,
    original_start: ClockTime,
    original_end: ClockTime,
) -> ClockTime {
    new_start.offset_by(original_end.minutes_since(original_start))
}

/// Nearest node at or above `node` that is a time-grid cell.
pub fn closest_time_slot<N: DropNode>(node: N) -> Option<N> {
    let mut current = Some(node);
    while let Some(node) = current {
        if node.is_time_slot() {
            return Some(node);
        }
        current = node.parent();
    }
    None
}

/// Vertical pointer offset from the top of `cell`.
pub fn drop_offset_in(pointer: Pos2, cell: Rect) -> f32 {
    pointer.y - cell.top()
}
