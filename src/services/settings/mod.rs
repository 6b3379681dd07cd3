use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::ViewSettings;

const SETTINGS_FILE: &str = "settings.toml";

/// Loads view settings from a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service pointing at the per-user config directory.
    pub fn from_default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "Ken24T", "ColumnWeekView")
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<ViewSettings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {:?}, using default business hours",
                self.path
            );
            return Ok(ViewSettings::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {:?}", self.path))?;
        let settings: ViewSettings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings in {:?}", self.path))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {:?}: {}", self.path, e))?;

        Ok(settings)
    }

    /// Write settings back out, creating the parent directory if needed.
    pub fn save(&self, settings: &ViewSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }
        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings to {:?}", self.path))?;
        Ok(())
    }
}
