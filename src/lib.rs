// Column Week View Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod utils;

pub use models::entry::{EntryCategory, EntryDefinition, ScheduledEntry, TimeRange};
pub use models::grid::{Cell, TimeSlot, Week};
pub use models::settings::{BusinessHours, ConfigError, ViewSettings};
pub use services::grid::{compute_time_slots, compute_week, is_today, resolve_instant, Grid, GridBuilder};
pub use services::interaction::{DragSession, InteractionResolver, SelectedRange, WeekViewCallbacks};
pub use services::store::{EventStore, SharedStore, StoreAccess};
