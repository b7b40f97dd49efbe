//! Record sources

pub mod file_source;
pub mod http_source;

use async_trait::async_trait;

pub use file_source::FileSource;
pub use http_source::HttpSource;

use crate::config::SourceConfig;
use crate::{DataError, Dataset};

/// Trait for record sources
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the resource and parse it into a dataset
    async fn load(&self) -> Result<Dataset, DataError>;

    /// Get the source name (file name of the resource)
    fn source_name(&self) -> &str;
}

/// Pick the source matching the configured location
pub fn source_for_location(config: &SourceConfig) -> Box<dyn RecordSource> {
    if config.is_remote() {
        Box::new(HttpSource::new(config.location.trim(), config.null_config.clone()))
    } else {
        Box::new(FileSource::new(config.location.trim(), config.null_config.clone()))
    }
}

/// Last path segment of a location, used as the source name
fn name_from_location(location: &str) -> &str {
    let without_query = location.split(&['?', '#'][..]).next().unwrap_or(location);
    without_query
        .trim_end_matches(&['/', '\\'][..])
        .rsplit(&['/', '\\'][..])
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(location)
}

/// Parse on the blocking pool
async fn parse_off_thread(source_name: String, text: String, null_config: crate::NullConfig) -> Result<Dataset, DataError> {
    tokio::task::spawn_blocking(move || crate::parse_dataset(&source_name, &text, &null_config)).await?
}
