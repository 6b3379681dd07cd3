// Test fixtures - reusable test data
// Provides a fixed week, cells and an event store across integration tests

#![allow(dead_code)]

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use column_week_view::{
    Cell, EntryCategory, EntryDefinition, EventStore, ScheduledEntry, TimeRange, TimeSlot,
    WeekViewCallbacks,
};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Dec 2, 2024
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 2).unwrap()
    }

    /// Tuesday, Dec 3, 2024
    pub fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 3).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        day.and_hms_opt(hour, minute, 0).unwrap()
    }
}

pub fn cell(day: NaiveDate, hour: u32, minute: u32) -> Cell {
    Cell::new(day, TimeSlot::from_hm(hour, minute))
}

/// Store with a primary entry Monday 09:00-11:00 and a secondary entry
/// Monday 14:00-16:00.
pub fn weekly_store() -> EventStore {
    let monday = dates::monday();
    let mut defs = HashMap::new();
    defs.insert(
        "planning".to_string(),
        EntryDefinition::titled(EntryCategory::Primary, "Sprint planning"),
    );
    defs.insert(
        "on-call".to_string(),
        EntryDefinition::titled(EntryCategory::Secondary, "On-call shift"),
    );
    EventStore::new(
        defs,
        vec![
            ScheduledEntry::new(
                "planning-1",
                "planning",
                TimeRange::new(dates::at(monday, 9, 0), dates::at(monday, 11, 0)),
            ),
            ScheduledEntry::new(
                "on-call-1",
                "on-call",
                TimeRange::new(dates::at(monday, 14, 0), dates::at(monday, 16, 0)),
            ),
        ],
    )
}

/// Everything the resolver reported, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reported {
    Range(NaiveDateTime, NaiveDateTime),
    Primary(String),
    Secondary(String),
    Selected(Cell),
    Cleared,
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Reported>,
}

impl Recorder {
    pub fn ranges(&self) -> Vec<(NaiveDateTime, NaiveDateTime)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Reported::Range(start, end) => Some((*start, *end)),
                _ => None,
            })
            .collect()
    }

    pub fn clicks(&self) -> Vec<Reported> {
        self.events
            .iter()
            .filter(|e| matches!(e, Reported::Primary(_) | Reported::Secondary(_)))
            .cloned()
            .collect()
    }
}

impl WeekViewCallbacks for Recorder {
    fn on_range_selected(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        self.events.push(Reported::Range(start, end));
    }

    fn on_primary_entry_click(&mut self, entry: &ScheduledEntry) {
        self.events.push(Reported::Primary(entry.instance_id.clone()));
    }

    fn on_secondary_entry_click(&mut self, entry: &ScheduledEntry) {
        self.events.push(Reported::Secondary(entry.instance_id.clone()));
    }

    fn on_cell_selected(&mut self, cell: Cell) {
        self.events.push(Reported::Selected(cell));
    }

    fn on_selection_cleared(&mut self) {
        self.events.push(Reported::Cleared);
    }
}
