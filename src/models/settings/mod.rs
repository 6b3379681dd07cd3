//! View settings: business hours, slot granularity and week boundary.
//!
//! Settings arrive as injected data (a TOML file or host-built values) and are
//! validated once before a grid is built, so a malformed configuration is
//! reported before any cell renders.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::parse_time_of_day;

pub const DEFAULT_SLOT_INTERVAL_MINUTES: i64 = 30;
/// Longest slot interval accepted: one day.
pub const MAX_SLOT_INTERVAL_MINUTES: i64 = 24 * 60;

/// Configuration errors raised while validating settings or building a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Slot interval must be positive, got {0} minutes")]
    NonPositiveInterval(i64),
    #[error("Slot interval must be at most 1440 minutes, got {0} minutes")]
    IntervalTooLarge(i64),
    #[error("Invalid {field} '{value}' (expected H:mm)")]
    MalformedTime { field: &'static str, value: String },
    #[error("Weekday index {0} is out of range (0=Sunday..6=Saturday)")]
    InvalidWeekday(u8),
    #[error("First day of week {0} is out of range (0=Sunday..6=Saturday)")]
    InvalidFirstDayOfWeek(u8),
}

/// Working hours shown by the grid.
///
/// `days_of_week` uses 0 = Sunday. The grid always renders a full week; the
/// set is only a rendering hint (see `Grid::is_business_day`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessHours {
    pub days_of_week: Vec<u8>,
    pub start_time: String,
    pub end_time: String,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            days_of_week: vec![1, 2, 3, 4, 5], // Monday - Friday
            start_time: "8:00".to_string(),
            end_time: "20:00".to_string(),
        }
    }
}

impl BusinessHours {
    pub fn start(&self) -> Result<NaiveTime, ConfigError> {
        parse_field("startTime", &self.start_time)
    }

    pub fn end(&self) -> Result<NaiveTime, ConfigError> {
        parse_field("endTime", &self.end_time)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.start()?;
        self.end()?;
        if let Some(&day) = self.days_of_week.iter().find(|&&d| d > 6) {
            return Err(ConfigError::InvalidWeekday(day));
        }
        Ok(())
    }

    /// Whether `date` falls on a configured working day.
    pub fn includes(&self, date: NaiveDate) -> bool {
        let weekday = date.weekday().num_days_from_sunday() as u8;
        self.days_of_week.contains(&weekday)
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<NaiveTime, ConfigError> {
    parse_time_of_day(value).ok_or_else(|| ConfigError::MalformedTime {
        field,
        value: value.to_string(),
    })
}

/// Everything the grid builder needs besides the reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub slot_interval_minutes: i64,
    pub first_day_of_week: u8,
    pub business_hours: BusinessHours,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            slot_interval_minutes: DEFAULT_SLOT_INTERVAL_MINUTES,
            first_day_of_week: 0, // Sunday
            business_hours: BusinessHours::default(),
        }
    }
}

impl ViewSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_interval_minutes <= 0 {
            return Err(ConfigError::NonPositiveInterval(self.slot_interval_minutes));
        }
        if self.slot_interval_minutes > MAX_SLOT_INTERVAL_MINUTES {
            return Err(ConfigError::IntervalTooLarge(self.slot_interval_minutes));
        }
        if self.first_day_of_week > 6 {
            return Err(ConfigError::InvalidFirstDayOfWeek(self.first_day_of_week));
        }
        self.business_hours.validate()
    }
}
