//! Calendar event service entry point.
//! Stores events in SQLite and applies the updates produced by drops.

use std::future::{ready, Ready};

use rusqlite::Connection;

use crate::dnd::payload::EventUpdate;

pub mod crud;
mod shared;

/// Service for managing calendar events stored in SQLite.
pub struct EventService<'a> {
    pub(crate) conn: &'a Connection,
}

impl<'a> EventService<'a> {
    /// Create a new EventService with a database connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Updater for a [`DragController`](crate::dnd::DragController) that
    /// writes each drop straight to the database.
    pub fn updater(&self) -> impl FnMut(i64, EventUpdate) -> Ready<anyhow::Result<()>> + '_ {
        move |event_id, update| ready(self.apply_update(event_id, &update).map(|_| ()))
    }
}
