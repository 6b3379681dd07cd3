//! Scheduled entry model.
//!
//! Entries are owned by the host's event store: a definition carries the
//! category used to route clicks, an instance carries the concrete time range
//! and points back at its definition.

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::utils::date::truncate_to_minute;

/// Category of an entry definition. Clicks are dispatched per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryCategory {
    Primary,
    Secondary,
}

impl EntryCategory {
    pub const ALL: [EntryCategory; 2] = [EntryCategory::Primary, EntryCategory::Secondary];
}

impl fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDefinition {
    pub category: EntryCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl EntryDefinition {
    pub fn new(category: EntryCategory) -> Self {
        Self {
            category,
            title: None,
        }
    }

    pub fn titled(category: EntryCategory, title: impl Into<String>) -> Self {
        Self {
            category,
            title: Some(title.into()),
        }
    }
}

/// Closed range `[start, end]` of an entry instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Inclusive on both ends, compared at minute precision.
    pub fn contains_minute(&self, instant: NaiveDateTime) -> bool {
        let instant = truncate_to_minute(instant);
        truncate_to_minute(self.start) <= instant && instant <= truncate_to_minute(self.end)
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// A concrete occurrence in the event store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEntry {
    pub instance_id: String,
    pub def_id: String,
    pub range: TimeRange,
}

impl ScheduledEntry {
    pub fn new(
        instance_id: impl Into<String>,
        def_id: impl Into<String>,
        range: TimeRange,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            def_id: def_id.into(),
            range,
        }
    }
}
