// Clock time utilities
// Wall-clock "HH:MM" values used by event start/end times

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Errors produced when parsing an `HH:MM` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("time '{0}' is not in HH:MM format")]
    Format(String),
    #[error("minutes must be below 60, got {0}")]
    MinuteOutOfRange(u32),
}

/// A wall-clock time of day stored as minutes since midnight.
///
/// There is no timezone and no day rollover: a value at or past 1440 minutes
/// keeps counting hours, so `24 * 60 + 30` formats as `24:30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u32);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Returns `None` when `minute` is not a valid minute of the hour.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if minute >= MINUTES_PER_HOUR {
            return None;
        }
        hour.checked_mul(MINUTES_PER_HOUR)
            .and_then(|total| total.checked_add(minute))
            .map(Self)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Signed distance in minutes from `earlier` to `self`.
    pub fn minutes_since(self, earlier: ClockTime) -> i64 {
        i64::from(self.0) - i64::from(earlier.0)
    }

    /// Shift by a signed number of minutes, saturating at midnight.
    pub fn offset_by(self, delta_minutes: i64) -> Self {
        let total = (i64::from(self.0) + delta_minutes).clamp(0, i64::from(u32::MAX));
        Self(total as u32)
    }

    /// True when the value falls inside a single day (before 24:00).
    pub fn is_within_day(self) -> bool {
        self.0 < MINUTES_PER_DAY
    }

    /// Convert to a `chrono::NaiveTime`, if the value lies within one day.
    pub fn to_naive_time(self) -> Option<chrono::NaiveTime> {
        if !self.is_within_day() {
            return None;
        }
        chrono::NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
    }
}

impl From<chrono::NaiveTime> for ClockTime {
    fn from(time: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        Self(time.hour() * MINUTES_PER_HOUR + time.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (hours, minutes) = trimmed
            .split_once(':')
            .ok_or_else(|| TimeParseError::Format(s.to_string()))?;

        let parse_part = |part: &str| -> Result<u32, TimeParseError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TimeParseError::Format(s.to_string()));
            }
            part.parse::<u32>()
                .map_err(|_| TimeParseError::Format(s.to_string()))
        };

        let hours = parse_part(hours)?;
        let minutes = parse_part(minutes)?;
        if minutes >= MINUTES_PER_HOUR {
            return Err(TimeParseError::MinuteOutOfRange(minutes));
        }

        hours
            .checked_mul(MINUTES_PER_HOUR)
            .and_then(|total| total.checked_add(minutes))
            .map(Self)
            .ok_or_else(|| TimeParseError::Format(s.to_string()))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
