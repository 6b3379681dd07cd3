use chrono::NaiveDateTime;

use crate::utils::date::is_same_day;

/// In-progress drag over the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

/// A drag that ended on the same day it started.
///
/// `start` and `end` are not normalized: dragging upwards yields
/// `end < start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectedRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DragSession {
    pub fn begin(start: NaiveDateTime) -> Self {
        Self { start, end: None }
    }

    pub fn update_end(&mut self, end: NaiveDateTime) {
        self.end = Some(end);
    }

    /// Committed range, or `None` when the end is missing or lands on
    /// another calendar date.
    pub fn finish(self) -> Option<SelectedRange> {
        let end = self.end?;
        if !is_same_day(self.start, end) {
            return None;
        }
        Some(SelectedRange {
            start: self.start,
            end,
        })
    }
}
