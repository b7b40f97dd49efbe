//! Application settings, read from an optional JSON file

use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use qd_data::SourceConfig;
use qd_views::{ChartConfig, TableConfig};

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "quakedash.json";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Where the records come from
    pub source: SourceConfig,

    pub chart: ChartConfig,

    pub table: TableConfig,

    /// Use the dark palette
    pub dark_mode: bool,

    /// Initial window size in points
    pub window_size: [f32; 2],
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            chart: ChartConfig::default(),
            table: TableConfig::default(),
            dark_mode: false,
            window_size: [1280.0, 800.0],
        }
    }
}

impl AppSettings {
    /// Read settings from `path`, falling back to defaults on any problem
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not read {:?}, using defaults: {}", path, e);
                return Self::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Invalid settings in {:?}, using defaults: {}", path, e);
                Self::default()
            }
        }
    }
}
