//! Workbench configuration persistence
//!
//! Stores user preferences in `~/.config/viewdock/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Workbench configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkbenchConfig {
    /// Contributions file replacing the embedded view/container set
    #[serde(default)]
    pub contributions: Option<PathBuf>,

    /// Restore moved views from the last session
    #[serde(default = "default_restore_view_locations")]
    pub restore_view_locations: bool,

    /// Smallest size (logical pixels) a part can be resized down to
    #[serde(default = "default_min_part_size")]
    pub min_part_size: f32,

    /// Largest share of the window a side part can be resized up to
    #[serde(default = "default_max_part_fraction")]
    pub max_part_fraction: f32,
}

fn default_restore_view_locations() -> bool {
    true
}

fn default_min_part_size() -> f32 {
    150.0
}

fn default_max_part_fraction() -> f32 {
    0.8
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            contributions: None,
            restore_view_locations: default_restore_view_locations(),
            min_part_size: default_min_part_size(),
            max_part_fraction: default_max_part_fraction(),
        }
    }
}

impl WorkbenchConfig {
    /// Load config from the user config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
