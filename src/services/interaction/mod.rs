//! Gesture handling for the column week view.
//!
//! `InteractionResolver` turns drag and click gestures on grid cells into
//! selected ranges and entry clicks, reported through `WeekViewCallbacks`.
//! It owns the only mutable state of the view: one optional drag session.

pub mod drag;

use chrono::NaiveDateTime;

use crate::models::entry::{EntryCategory, ScheduledEntry};
use crate::models::grid::Cell;
use crate::services::store::StoreAccess;

pub use drag::{DragSession, SelectedRange};

/// Host hooks invoked synchronously, at most once per gesture each.
#[cfg_attr(test, mockall::automock)]
pub trait WeekViewCallbacks {
    /// A drag finished on the same day it started. `end` may precede `start`.
    fn on_range_selected(&mut self, start: NaiveDateTime, end: NaiveDateTime);

    fn on_primary_entry_click(&mut self, entry: &ScheduledEntry);

    fn on_secondary_entry_click(&mut self, entry: &ScheduledEntry);

    /// The pointer entered `cell` while dragging; mark it as selected.
    fn on_cell_selected(&mut self, _cell: Cell) {}

    /// Remove every selection marker on the grid.
    fn on_selection_cleared(&mut self) {}
}

impl<T: WeekViewCallbacks + ?Sized> WeekViewCallbacks for &mut T {
    fn on_range_selected(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        (**self).on_range_selected(start, end)
    }

    fn on_primary_entry_click(&mut self, entry: &ScheduledEntry) {
        (**self).on_primary_entry_click(entry)
    }

    fn on_secondary_entry_click(&mut self, entry: &ScheduledEntry) {
        (**self).on_secondary_entry_click(entry)
    }

    fn on_cell_selected(&mut self, cell: Cell) {
        (**self).on_cell_selected(cell)
    }

    fn on_selection_cleared(&mut self) {
        (**self).on_selection_cleared()
    }
}

pub struct InteractionResolver<C, S> {
    callbacks: C,
    store: S,
    session: Option<DragSession>,
}

impl<C: WeekViewCallbacks, S: StoreAccess> InteractionResolver<C, S> {
    pub fn new(callbacks: C, store: S) -> Self {
        Self {
            callbacks,
            store,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (C, S) {
        (self.callbacks, self.store)
    }

    /// Start a new drag at `cell`, replacing any drag that never ended.
    pub fn drag_start(&mut self, cell: Cell) {
        let start = cell.instant();
        if let Some(stale) = self.session.replace(DragSession::begin(start)) {
            log::debug!("Discarding unfinished drag started at {}", stale.start);
        }
        log::debug!("Drag started at {}", start);
    }

    /// Move the drag endpoint to `cell`. Returns false when no drag is active.
    pub fn drag_over(&mut self, cell: Cell) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.update_end(cell.instant());
        self.callbacks.on_cell_selected(cell);
        true
    }

    /// Finish the drag, reporting the range if it stayed within one day.
    pub fn drag_end(&mut self) -> Option<SelectedRange> {
        let selected = self.session.take().and_then(DragSession::finish);
        match selected {
            Some(range) => {
                log::debug!("Drag selected {} to {}", range.start, range.end);
                self.callbacks.on_range_selected(range.start, range.end);
            }
            None => log::debug!("Drag ended without a same-day range"),
        }
        self.callbacks.on_selection_cleared();
        selected
    }

    /// Drop the current drag without reporting anything.
    pub fn reset(&mut self) {
        self.session = None;
    }

    /// Dispatch a click on `cell` to the callback for `category`.
    pub fn click(&mut self, category: EntryCategory, cell: Cell) -> Option<ScheduledEntry> {
        let entry = self.find_entry(category, cell)?;
        match category {
            EntryCategory::Primary => self.callbacks.on_primary_entry_click(&entry),
            EntryCategory::Secondary => self.callbacks.on_secondary_entry_click(&entry),
        }
        Some(entry)
    }

    /// First entry of `category` covering the cell's instant, in store order.
    pub fn find_entry(&self, category: EntryCategory, cell: Cell) -> Option<ScheduledEntry> {
        let instant = cell.instant();
        self.store
            .read(|store| store.find_at(category, instant).cloned())
    }

    pub fn has_entry(&self, category: EntryCategory, cell: Cell) -> bool {
        let instant = cell.instant();
        self.store
            .read(|store| store.find_at(category, instant).is_some())
    }

    /// Whether to draw the entry indicator in `cell`; only sub-column 0 carries it.
    pub fn shows_indicator(&self, category: EntryCategory, cell: Cell) -> bool {
        cell.is_indicator() && self.has_entry(category, cell)
    }
}
