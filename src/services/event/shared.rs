use rusqlite::{self, Result, Row};

use crate::models::event::Event;
use crate::utils::time::ClockTime;

pub(crate) const EVENT_COLUMNS: &str =
    "id, title, description, location, category, event_date, start_time, end_time";

pub(crate) fn parse_clock_time(value: String) -> Result<ClockTime> {
    value
        .parse::<ClockTime>()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Map a row selected with [`EVENT_COLUMNS`] to an event.
pub(crate) fn row_to_event(row: &Row<'_>) -> Result<Event> {
    Ok(Event {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        location: row.get(3)?,
        category: row.get(4)?,
        date: row.get(5)?,
        start_time: parse_clock_time(row.get(6)?)?,
        end_time: parse_clock_time(row.get(7)?)?,
    })
}
