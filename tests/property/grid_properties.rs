// Property-based tests for the grid builder
// Week shape, slot spacing and cell-to-instant mapping over random inputs

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveTime};
use column_week_view::{compute_time_slots, compute_week, resolve_instant, Cell, TimeSlot};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 .. roughly 2050
    (0i64..18_250).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn any_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

proptest! {
    /// Property: a week is 7 consecutive days containing the reference date
    #[test]
    fn prop_week_is_seven_consecutive_days(date in any_date(), first_day in any::<u8>()) {
        let week = compute_week(Some(date), first_day);
        let days = week.days();

        prop_assert_eq!(days.len(), 7);
        for pair in days.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        prop_assert!(week.contains(date));
    }

    /// Property: slots start at the start time and step by exactly the interval
    #[test]
    fn prop_slots_step_by_interval(
        start in any_time(),
        end in any_time(),
        interval in 1i64..=180,
    ) {
        let slots = compute_time_slots(start, end, interval).unwrap();

        prop_assert_eq!(slots[0], TimeSlot::from_time(start));
        for pair in slots.windows(2) {
            prop_assert!(pair[0] < pair[1]);
            prop_assert_eq!(i64::from(pair[1].minutes() - pair[0].minutes()), interval);
        }

        // The last slot reaches the end time without a full interval to spare
        let last = i64::from(slots[slots.len() - 1].minutes());
        let end_minutes = i64::from(TimeSlot::from_time(end).minutes());
        if end_minutes > i64::from(TimeSlot::from_time(start).minutes()) {
            prop_assert!(last >= end_minutes);
            prop_assert!(last - end_minutes < interval);
        } else {
            prop_assert_eq!(slots.len(), 1);
        }
    }

    /// Property: non-positive intervals are always rejected
    #[test]
    fn prop_non_positive_interval_rejected(
        start in any_time(),
        end in any_time(),
        interval in -1_000i64..=0,
    ) {
        prop_assert!(compute_time_slots(start, end, interval).is_err());
    }

    /// Property: distinct cells of one week resolve to distinct instants
    #[test]
    fn prop_resolve_instant_is_injective(date in any_date(), interval in 5i64..=120) {
        let week = compute_week(Some(date), 0);
        let start = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        let end = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
        let slots = compute_time_slots(start, end, interval).unwrap();
        // The final slot may spill into the next day; keep rows within one day
        let slots: Vec<_> = slots.into_iter().filter(|s| s.day_offset() == 0).collect();

        let mut seen = HashSet::new();
        for day in week.iter() {
            for &slot in &slots {
                prop_assert!(seen.insert(resolve_instant(day, slot)));
            }
        }
        prop_assert_eq!(seen.len(), 7 * slots.len());
    }

    /// Property: sub-columns never change the resolved instant
    #[test]
    fn prop_sub_columns_share_instant(date in any_date(), time in any_time(), sub in 0u8..4) {
        let cell = Cell::new(date, TimeSlot::from_time(time));
        prop_assert_eq!(cell.with_sub_column(sub).instant(), date.and_time(time));
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_week_across_year_boundary() {
        // Wednesday, Jan 1, 2025
        let week = compute_week(NaiveDate::from_ymd_opt(2025, 1, 1), 0);
        assert_eq!(week.first(), NaiveDate::from_ymd_opt(2024, 12, 29).unwrap());
        assert_eq!(week.last(), NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());
    }

    #[test]
    fn test_week_around_leap_day() {
        let week = compute_week(NaiveDate::from_ymd_opt(2024, 2, 29), 1);
        assert_eq!(week.first(), NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        assert_eq!(week.last(), NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
    }
}
