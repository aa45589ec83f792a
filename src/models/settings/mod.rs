// Settings module
// Tunables for the drag-and-drop controller

use serde::{Deserialize, Serialize};

use crate::dnd::payload::TEXT_PLAIN;
use crate::dnd::resolve::DATE_SEARCH_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    /// Nodes inspected, starting at the drop target, when looking for a date marker
    pub date_search_depth: usize,
    /// Transfer format that carries the dragged event's id
    pub transfer_format: String,
    /// Also publish a JSON snapshot of the dragged event
    pub attach_event_json: bool,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            date_search_depth: DATE_SEARCH_DEPTH,
            transfer_format: TEXT_PLAIN.to_string(),
            attach_event_json: true,
        }
    }
}

impl DragSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.date_search_depth == 0 {
            return Err("date_search_depth must be at least 1".to_string());
        }

        if self.transfer_format.trim().is_empty() {
            return Err("transfer_format cannot be empty".to_string());
        }

        Ok(())
    }
}
