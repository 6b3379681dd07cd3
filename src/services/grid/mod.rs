//! Grid builder for the column week view.
//!
//! Derives the week columns and the time-slot rows from a reference date and
//! the view settings. Everything here is a pure function of its inputs except
//! `is_today`, which reads the local clock.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::grid::{Cell, TimeSlot, Week, DAYS_PER_WEEK, SUB_COLUMNS};
use crate::models::settings::{ConfigError, ViewSettings, MAX_SLOT_INTERVAL_MINUTES};
use crate::utils::date::get_week_start;

/// Week containing `reference` (today when `None`), starting on
/// `first_day_of_week` (0 = Sunday).
pub fn compute_week(reference: Option<NaiveDate>, first_day_of_week: u8) -> Week {
    let reference = reference.unwrap_or_else(|| Local::now().date_naive());
    let start = get_week_start(reference, first_day_of_week);
    Week::from_days(std::array::from_fn(|i| start + Duration::days(i as i64)))
}

/// Slot rows from `start` stepping by `interval_minutes`.
///
/// `start` is always emitted. The cursor then advances while it is strictly
/// before `end`, emitting each step, so the last slot lands on or past `end`
/// by less than one interval. Intervals must lie in `1..=1440` minutes.
pub fn compute_time_slots(
    start: NaiveTime,
    end: NaiveTime,
    interval_minutes: i64,
) -> Result<Vec<TimeSlot>, ConfigError> {
    if interval_minutes <= 0 {
        return Err(ConfigError::NonPositiveInterval(interval_minutes));
    }
    if interval_minutes > MAX_SLOT_INTERVAL_MINUTES {
        return Err(ConfigError::IntervalTooLarge(interval_minutes));
    }
    let step = u32::try_from(interval_minutes)
        .map_err(|_| ConfigError::IntervalTooLarge(interval_minutes))?;

    let end = TimeSlot::from_time(end);
    let mut cursor = TimeSlot::from_time(start);
    let mut slots = vec![cursor];
    while cursor < end {
        cursor = TimeSlot::from_minutes(cursor.minutes() + step);
        slots.push(cursor);
    }
    Ok(slots)
}

/// Combine a day and a slot into one instant at minute precision.
pub fn resolve_instant(day: NaiveDate, slot: TimeSlot) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(slot.minutes()))
}

/// True when `day` is the local current date.
pub fn is_today(day: NaiveDate) -> bool {
    is_same_date(day, Local::now().naive_local())
}

pub fn is_same_date(day: NaiveDate, now: NaiveDateTime) -> bool {
    day == now.date()
}

/// Week columns and slot rows for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub week: Week,
    pub slots: Vec<TimeSlot>,
    settings: ViewSettings,
}

impl Grid {
    /// Cells in render order: slot rows, then day columns, then sub-columns.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.slots.iter().flat_map(move |&slot| {
            self.week.iter().flat_map(move |day| {
                (0..SUB_COLUMNS).map(move |sub| Cell::new(day, slot).with_sub_column(sub))
            })
        })
    }

    /// Cells of a single row, one per day and sub-column.
    pub fn row(&self, slot: TimeSlot) -> impl Iterator<Item = Cell> + '_ {
        self.week.iter().flat_map(move |day| {
            (0..SUB_COLUMNS).map(move |sub| Cell::new(day, slot).with_sub_column(sub))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.slots.len() * DAYS_PER_WEEK * SUB_COLUMNS as usize
    }

    pub fn is_today_column(&self, day: NaiveDate) -> bool {
        is_today(day)
    }

    /// Rendering hint only: every day keeps its column and stays interactive.
    pub fn is_business_day(&self, day: NaiveDate) -> bool {
        self.settings.business_hours.includes(day)
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }
}

/// Builds grids from validated settings.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    settings: ViewSettings,
    start: NaiveTime,
    end: NaiveTime,
}

impl GridBuilder {
    /// Validate `settings` up front so a bad configuration fails before render.
    pub fn new(settings: ViewSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let start = settings.business_hours.start()?;
        let end = settings.business_hours.end()?;
        Ok(Self {
            settings,
            start,
            end,
        })
    }

    pub fn build(&self, reference: Option<NaiveDate>) -> Result<Grid, ConfigError> {
        let week = compute_week(reference, self.settings.first_day_of_week);
        let slots = compute_time_slots(self.start, self.end, self.settings.slot_interval_minutes)?;
        log::debug!(
            "Built grid for week of {} with {} slots",
            week.first(),
            slots.len()
        );
        Ok(Grid {
            week,
            slots,
            settings: self.settings.clone(),
        })
    }
}
