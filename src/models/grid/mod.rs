// Grid model
// Week, time slot and cell types making up the week-view lattice

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::services::grid::resolve_instant;

pub const DAYS_PER_WEEK: usize = 7;
/// Number of sub-columns each day is split into.
pub const SUB_COLUMNS: u8 = 4;
/// Sub-column that carries the entry indicator.
pub const INDICATOR_SUB_COLUMN: u8 = 0;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Seven consecutive dates in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week {
    days: [NaiveDate; DAYS_PER_WEEK],
}

impl Week {
    pub(crate) fn from_days(days: [NaiveDate; DAYS_PER_WEEK]) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first() <= date && date <= self.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }
}

/// A time-of-day row of the grid, stored as minutes since midnight.
///
/// The last generated slot may run past midnight; such a slot keeps its
/// offset (>= 24h) and resolves onto the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    minutes: u32,
}

impl TimeSlot {
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    pub fn from_time(time: NaiveTime) -> Self {
        Self {
            minutes: time.hour() * 60 + time.minute(),
        }
    }

    pub fn from_hm(hour: u32, minute: u32) -> Self {
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Minutes since midnight of the day the slot is drawn on.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Wall-clock time of the slot, wrapped into a single day.
    pub fn time(&self) -> NaiveTime {
        let wrapped = self.minutes % MINUTES_PER_DAY;
        NaiveTime::from_hms_opt(wrapped / 60, wrapped % 60, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Whole days the slot spills past the row's date.
    pub fn day_offset(&self) -> u32 {
        self.minutes / MINUTES_PER_DAY
    }

    /// Row label on a 1-24 hour clock, e.g. `08:30`; midnight reads `24:00`.
    pub fn label(&self) -> String {
        let time = self.time();
        let hour = match time.hour() {
            0 => 24,
            hour => hour,
        };
        format!("{:02}:{:02}", hour, time.minute())
    }
}

/// One interactive cell: a day column, a slot row and a sub-column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub day: NaiveDate,
    pub slot: TimeSlot,
    pub sub_column: u8,
}

impl Cell {
    pub fn new(day: NaiveDate, slot: TimeSlot) -> Self {
        Self {
            day,
            slot,
            sub_column: INDICATOR_SUB_COLUMN,
        }
    }

    pub fn with_sub_column(mut self, sub_column: u8) -> Self {
        self.sub_column = sub_column;
        self
    }

    /// Absolute instant this cell stands for. Sub-columns do not change it.
    pub fn instant(&self) -> NaiveDateTime {
        resolve_instant(self.day, self.slot)
    }

    pub fn is_indicator(&self) -> bool {
        self.sub_column == INDICATOR_SUB_COLUMN
    }
}
