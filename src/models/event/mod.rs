// Event module
// Calendar event model as seen by the drag-and-drop layer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::time::ClockTime;

/// A calendar event placed on a single day with wall-clock start and end times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<i64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use calendar_dnd::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
    /// let start = "09:00".parse().unwrap();
    /// let end = "09:15".parse().unwrap();
    /// let event = Event::new("Standup", date, start, end).unwrap();
    /// assert_eq!(event.duration_minutes(), 15);
    /// ```
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Result<Self, String> {
        let event = Self {
            id: None,
            title: title.into(),
            description: None,
            location: None,
            category: None,
            date,
            start_time,
            end_time,
        };

        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.end_time <= self.start_time {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(())
    }

    /// Length of the event in minutes. Negative if the times are inverted.
    pub fn duration_minutes(&self) -> i64 {
        self.end_time.minutes_since(self.start_time)
    }
}

/// Builder for creating events with optional fields
#[derive(Debug, Default)]
pub struct EventBuilder {
    id: Option<i64>,
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    category: Option<String>,
    date: Option<NaiveDate>,
    start_time: Option<ClockTime>,
    end_time: Option<ClockTime>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn start_time(mut self, time: ClockTime) -> Self {
        self.start_time = Some(time);
        self
    }

    pub fn end_time(mut self, time: ClockTime) -> Self {
        self.end_time = Some(time);
        self
    }

    /// Set start and end from `HH:MM` strings
    pub fn times(mut self, start: &str, end: &str) -> Result<Self, String> {
        let start = start
            .parse::<ClockTime>()
            .map_err(|e| format!("Invalid start time: {e}"))?;
        let end = end
            .parse::<ClockTime>()
            .map_err(|e| format!("Invalid end time: {e}"))?;
        self.start_time = Some(start);
        self.end_time = Some(end);
        Ok(self)
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let title = self.title.ok_or("Event title is required")?;
        let date = self.date.ok_or("Event date is required")?;
        let start_time = self.start_time.ok_or("Event start time is required")?;
        let end_time = self.end_time.ok_or("Event end time is required")?;

        let event = Event {
            id: self.id,
            title,
            description: self.description,
            location: self.location,
            category: self.category,
            date,
            start_time,
            end_time,
        };

        event.validate()?;
        Ok(event)
    }
}
