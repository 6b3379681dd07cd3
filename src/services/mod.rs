// Service layer: grid building, event-store lookups, gesture handling and settings

pub mod grid;
pub mod interaction;
pub mod settings;
pub mod store;
