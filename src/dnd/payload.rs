// Drag payload types
// Platform-neutral stand-ins for the pointer events and transfer data the
// render layer receives from its windowing toolkit.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::utils::time::ClockTime;

/// Format under which the dragged event's id is published.
pub const TEXT_PLAIN: &str = "text/plain";
/// Format under which a JSON snapshot of the dragged event is published.
pub const EVENT_JSON: &str = "application/x-calendar-event";

/// Kind of drop interaction a source allows or a target accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Link,
    Move,
}

/// Data carried along with a drag gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataTransfer {
    pub effect_allowed: DropEffect,
    pub drop_effect: DropEffect,
    items: BTreeMap<String, String>,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, format: impl Into<String>, data: impl Into<String>) {
        self.items.insert(format.into(), data.into());
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.items.get(format).map(String::as_str)
    }

    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// A pointer event delivered during drag-over or drop.
///
/// `target` is the node directly under the pointer, if any.
#[derive(Debug)]
pub struct PointerEvent<N> {
    pub target: Option<N>,
    pub position: Pos2,
    pub data_transfer: Option<DataTransfer>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl<N> PointerEvent<N> {
    pub fn new(target: Option<N>, position: Pos2) -> Self {
        Self {
            target,
            position,
            data_transfer: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn with_data_transfer(mut self, data_transfer: DataTransfer) -> Self {
        self.data_transfer = Some(data_transfer);
        self
    }

    /// Opt out of the toolkit's default handling (which refuses drops).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Changes requested for a rescheduled event. Absent fields stay unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<ClockTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<ClockTime>,
}

impl EventUpdate {
    pub fn date_only(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn with_times(date: NaiveDate, start_time: ClockTime, end_time: ClockTime) -> Self {
        Self {
            date: Some(date),
            start_time: Some(start_time),
            end_time: Some(end_time),
        }
    }

    pub fn has_time(&self) -> bool {
        self.start_time.is_some() || self.end_time.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && !self.has_time()
    }

    /// Copy the present fields onto `event`.
    pub fn apply_to(&self, event: &mut crate::models::event::Event) {
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(start) = self.start_time {
            event.start_time = start;
        }
        if let Some(end) = self.end_time {
            event.end_time = end;
        }
    }
}
