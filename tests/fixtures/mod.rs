// Test fixtures - reusable calendar layouts
// Month and week grids shaped the way the render layer lays them out

#![allow(dead_code)]

use calendar_dnd::dnd::{NodeId, SceneNodeSpec, SceneTree};
use chrono::NaiveDate;
use egui::{pos2, vec2, Rect};

pub const SLOT_HEIGHT: f32 = 120.0;
pub const SLOT_WIDTH: f32 = 100.0;

pub fn july(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, day).unwrap()
}

/// A month grid: one date cell per day of July 2025, with an event box
/// (and a title label inside it) on the 10th.
pub struct MonthGrid {
    pub tree: SceneTree,
    pub cells: Vec<NodeId>,
    pub event_box: NodeId,
    pub event_title: NodeId,
}

impl MonthGrid {
    pub fn cell(&self, day: u32) -> NodeId {
        self.cells[(day - 1) as usize]
    }
}

pub fn month_grid() -> MonthGrid {
    let mut tree = SceneTree::new();
    let table = tree.add_root(SceneNodeSpec::new().with_label("month"));
    let cells: Vec<NodeId> = (1..=31)
        .map(|day| {
            tree.add_child(
                table,
                SceneNodeSpec::date_cell(july(day)).with_label(format!("day-{day}")),
            )
        })
        .collect();
    let event_box = tree.add_child(cells[9], SceneNodeSpec::event_box().with_label("event"));
    let event_title = tree.add_child(event_box, SceneNodeSpec::new().with_label("event-title"));

    MonthGrid {
        tree,
        cells,
        event_box,
        event_title,
    }
}

/// A week grid of time-slot cells, one column per day from the 14th to the
/// 20th, each cell `SLOT_HEIGHT` tall and starting at y = 200.
pub struct WeekGrid {
    pub tree: SceneTree,
    pub slots: Vec<NodeId>,
    pub slot_content: Vec<NodeId>,
}

impl WeekGrid {
    pub fn slot(&self, day: u32) -> NodeId {
        self.slots[(day - 14) as usize]
    }

    pub fn content(&self, day: u32) -> NodeId {
        self.slot_content[(day - 14) as usize]
    }
}

pub fn slot_rect(column: usize) -> Rect {
    Rect::from_min_size(
        pos2(column as f32 * SLOT_WIDTH, 200.0),
        vec2(SLOT_WIDTH, SLOT_HEIGHT),
    )
}

pub fn week_grid() -> WeekGrid {
    let mut tree = SceneTree::new();
    let table = tree.add_root(SceneNodeSpec::new().with_label("week"));
    let row = tree.add_child(table, SceneNodeSpec::new());
    let mut slots = Vec::new();
    let mut slot_content = Vec::new();
    for (column, day) in (14..=20).enumerate() {
        let slot = tree.add_child(
            row,
            SceneNodeSpec::time_slot(slot_rect(column)).with_date(july(day)),
        );
        slot_content.push(tree.add_child(slot, SceneNodeSpec::new()));
        slots.push(slot);
    }

    WeekGrid {
        tree,
        slots,
        slot_content,
    }
}
