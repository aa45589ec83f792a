//! Drag settings persistence.
//! Settings live in a TOML file under the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::DragSettings;

const SETTINGS_FILE: &str = "drag.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service pointing at the platform config directory, if one can be determined.
    pub fn with_default_location() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "KenBoyle", "RustCalendar")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the settings file.
    pub fn load(&self) -> Result<DragSettings> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;

        let settings: DragSettings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Load the settings file, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(&self) -> DragSettings {
        if !self.path.exists() {
            log::info!(
                "No drag settings at {}, using defaults",
                self.path.display()
            );
            return DragSettings::default();
        }

        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load drag settings: {:#}, using defaults", e);
                DragSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &DragSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        Ok(())
    }
}
