use super::shared::{row_to_event, EVENT_COLUMNS};
use super::EventService;
use crate::dnd::payload::EventUpdate;
use crate::models::event::Event;
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use rusqlite::{self, params};

impl<'a> EventService<'a> {
    /// Create a new event in the database.
    pub fn create(&self, mut event: Event) -> Result<Event> {
        event.validate().map_err(|e| anyhow!(e))?;

        self.conn
            .execute(
                "INSERT INTO events (
                    title, description, location, category, event_date, start_time, end_time
                ) VALUES (?, ?, ?, ?, ?, ?, ?)",
                params![
                    event.title,
                    event.description,
                    event.location,
                    event.category,
                    event.date,
                    event.start_time.to_string(),
                    event.end_time.to_string(),
                ],
            )
            .context("Failed to insert event")?;

        event.id = Some(self.conn.last_insert_rowid());
        log::debug!("Created event {:?} '{}'", event.id, event.title);
        Ok(event)
    }

    /// Retrieve an event by ID.
    pub fn get(&self, id: i64) -> Result<Option<Event>> {
        let result = self.conn.query_row(
            &format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?"),
            [id],
            row_to_event,
        );

        match result {
            Ok(event) => Ok(Some(event)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All events on `date`, earliest start first.
    pub fn list_for_date(&self, date: NaiveDate) -> Result<Vec<Event>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {EVENT_COLUMNS} FROM events WHERE event_date = ? ORDER BY start_time, id"
            ))
            .context("Failed to prepare event query")?;

        let events = stmt
            .query_map([date], row_to_event)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read events")?;

        Ok(events)
    }

    /// Apply the fields present in `update` to a stored event.
    ///
    /// The merged event is validated before anything is written.
    pub fn apply_update(&self, id: i64, update: &EventUpdate) -> Result<Event> {
        let mut event = self
            .get(id)?
            .ok_or_else(|| anyhow!("Event with id {} not found", id))?;

        update.apply_to(&mut event);
        event.validate().map_err(|e| anyhow!(e))?;

        let rows_affected = self
            .conn
            .execute(
                "UPDATE events SET
                    event_date = ?, start_time = ?, end_time = ?, updated_at = CURRENT_TIMESTAMP
                 WHERE id = ?",
                params![
                    event.date,
                    event.start_time.to_string(),
                    event.end_time.to_string(),
                    id,
                ],
            )
            .context("Failed to update event")?;

        if rows_affected == 0 {
            return Err(anyhow!("Event with id {} not found", id));
        }

        log::info!(
            "Moved event {} to {} {}-{}",
            id,
            event.date,
            event.start_time,
            event.end_time
        );
        Ok(event)
    }

    /// Delete an event by ID.
    pub fn delete(&self, id: i64) -> Result<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM events WHERE id = ?", [id])
            .context("Failed to delete event")?;

        if rows_affected == 0 {
            return Err(anyhow!("Event with id {} not found", id));
        }

        Ok(())
    }
}
