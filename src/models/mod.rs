// Module exports for models

pub mod entry;
pub mod grid;
pub mod settings;
