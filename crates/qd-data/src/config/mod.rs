//! Record source configuration

pub mod null_handling;

use serde::{Serialize, Deserialize};

pub use null_handling::NullConfig;

/// Default location of the event catalogue, relative to the working directory
pub const DEFAULT_LOCATION: &str = "data/all_month.csv";

/// Where records are loaded from and how raw values are read
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// File path or `http(s)://` URL of the CSV resource
    pub location: String,

    /// Values treated as absent for optional metrics
    pub null_config: NullConfig,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            null_config: NullConfig::default(),
        }
    }
}

impl SourceConfig {
    /// Whether the location must be fetched over HTTP
    pub fn is_remote(&self) -> bool {
        let location = self.location.trim_start();
        location.starts_with("http://") || location.starts_with("https://")
    }
}
