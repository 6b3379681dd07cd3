//! Read-side view of the host's event store.
//!
//! Instances keep the order they were inserted in; that order decides which
//! entry wins when several cover the same cell. Lookups go through a
//! per-category index sorted by range start and return the same entry a
//! front-to-back scan would.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::entry::{EntryCategory, EntryDefinition, ScheduledEntry};
use crate::utils::date::truncate_to_minute;

/// Store shared with a host that swaps snapshots between gestures.
pub type SharedStore = Rc<RefCell<EventStore>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IndexedRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
    position: usize,
}

#[derive(Debug, Clone, Default)]
struct CategoryIndex {
    by_start: Vec<IndexedRange>,
}

impl CategoryIndex {
    fn insert(&mut self, range: IndexedRange) {
        let at = self
            .by_start
            .partition_point(|r| (r.start, r.position) <= (range.start, range.position));
        self.by_start.insert(at, range);
    }

    /// Store positions of every range covering `instant`, unordered.
    fn covering(&self, instant: NaiveDateTime) -> impl Iterator<Item = usize> + '_ {
        let upper = self.by_start.partition_point(|r| r.start <= instant);
        self.by_start[..upper]
            .iter()
            .filter(move |r| r.end >= instant)
            .map(|r| r.position)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    defs: HashMap<String, EntryDefinition>,
    #[serde(default)]
    instances: Vec<ScheduledEntry>,
}

/// Definitions by id plus instances in iteration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "StoreData", into = "StoreData")]
pub struct EventStore {
    defs: HashMap<String, EntryDefinition>,
    instances: Vec<ScheduledEntry>,
    positions: HashMap<String, usize>,
    index: HashMap<EntryCategory, CategoryIndex>,
}

impl From<StoreData> for EventStore {
    fn from(data: StoreData) -> Self {
        Self::new(data.defs, data.instances)
    }
}

impl From<EventStore> for StoreData {
    fn from(store: EventStore) -> Self {
        Self {
            defs: store.defs,
            instances: store.instances,
        }
    }
}

impl EventStore {
    pub fn new(
        defs: HashMap<String, EntryDefinition>,
        instances: impl IntoIterator<Item = ScheduledEntry>,
    ) -> Self {
        let mut store = Self {
            defs,
            ..Self::default()
        };
        for entry in instances {
            store.push_instance(entry);
        }
        store.rebuild_index();
        store
    }

    pub fn shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    pub fn definition(&self, def_id: &str) -> Option<&EntryDefinition> {
        self.defs.get(def_id)
    }

    pub fn instance(&self, instance_id: &str) -> Option<&ScheduledEntry> {
        self.positions
            .get(instance_id)
            .and_then(|&pos| self.instances.get(pos))
    }

    /// Instances in iteration order.
    pub fn instances(&self) -> &[ScheduledEntry] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Category of an instance, through its definition.
    pub fn category_of(&self, entry: &ScheduledEntry) -> Option<EntryCategory> {
        self.defs.get(&entry.def_id).map(|def| def.category)
    }

    /// Add or replace a definition.
    pub fn insert_definition(&mut self, def_id: impl Into<String>, def: EntryDefinition) {
        let def_id = def_id.into();
        let changed = self
            .defs
            .get(&def_id)
            .map_or(true, |old| old.category != def.category);
        self.defs.insert(def_id, def);
        if changed {
            self.rebuild_index();
        }
    }

    /// Append an instance, or replace one with the same id in place.
    pub fn insert_instance(&mut self, entry: ScheduledEntry) {
        if self.positions.contains_key(&entry.instance_id) {
            self.push_instance(entry);
            self.rebuild_index();
            return;
        }
        let position = self.push_instance(entry);
        self.index_position(position);
    }

    /// First instance in iteration order of `category` covering `instant`,
    /// inclusive on both ends at minute precision.
    pub fn find_at(&self, category: EntryCategory, instant: NaiveDateTime) -> Option<&ScheduledEntry> {
        let instant = truncate_to_minute(instant);
        let index = self.index.get(&category)?;
        let mut covering = index.covering(instant);
        let first = covering.next()?;
        let (position, overlaps) = covering.fold((first, 0usize), |(best, n), pos| {
            (best.min(pos), n + 1)
        });
        if overlaps > 0 {
            log::warn!(
                "{} {} entries overlap at {}; using the first in store order",
                overlaps + 1,
                category,
                instant
            );
        }
        self.instances.get(position)
    }

    /// Front-to-back scan with the same semantics as `find_at`.
    pub fn scan_at(&self, category: EntryCategory, instant: NaiveDateTime) -> Option<&ScheduledEntry> {
        self.instances.iter().find(|entry| {
            self.category_of(entry) == Some(category) && entry.range.contains_minute(instant)
        })
    }

    fn push_instance(&mut self, entry: ScheduledEntry) -> usize {
        match self.positions.get(&entry.instance_id) {
            Some(&pos) => {
                self.instances[pos] = entry;
                pos
            }
            None => {
                let pos = self.instances.len();
                self.positions.insert(entry.instance_id.clone(), pos);
                self.instances.push(entry);
                pos
            }
        }
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for position in 0..self.instances.len() {
            self.index_position(position);
        }
    }

    fn index_position(&mut self, position: usize) {
        let Some(entry) = self.instances.get(position) else {
            return;
        };
        let Some(def) = self.defs.get(&entry.def_id) else {
            log::warn!(
                "Instance {} references unknown definition {}; it will never match a cell",
                entry.instance_id,
                entry.def_id
            );
            return;
        };
        let range = IndexedRange {
            start: truncate_to_minute(entry.range.start),
            end: truncate_to_minute(entry.range.end),
            position,
        };
        self.index.entry(def.category).or_default().insert(range);
    }
}

/// Read access to the current event-store snapshot.
pub trait StoreAccess {
    fn read<R>(&self, f: impl FnOnce(&EventStore) -> R) -> R;
}

impl StoreAccess for EventStore {
    fn read<R>(&self, f: impl FnOnce(&EventStore) -> R) -> R {
        f(self)
    }
}

impl StoreAccess for Rc<EventStore> {
    fn read<R>(&self, f: impl FnOnce(&EventStore) -> R) -> R {
        f(self.as_ref())
    }
}

impl StoreAccess for RefCell<EventStore> {
    fn read<R>(&self, f: impl FnOnce(&EventStore) -> R) -> R {
        f(&*self.borrow())
    }
}

impl StoreAccess for SharedStore {
    fn read<R>(&self, f: impl FnOnce(&EventStore) -> R) -> R {
        f(&*self.borrow())
    }
}

impl<T: StoreAccess> StoreAccess for &T {
    fn read<R>(&self, f: impl FnOnce(&EventStore) -> R) -> R {
        (**self).read(f)
    }
}
