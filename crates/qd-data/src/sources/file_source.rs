use std::path::PathBuf;
use async_trait::async_trait;

use super::{name_from_location, parse_off_thread, RecordSource};
use crate::config::NullConfig;
use crate::{DataError, Dataset};

/// Record source reading a CSV file from disk
pub struct FileSource {
    /// Path to the CSV file
    path: PathBuf,
    /// Display name derived from the path
    name: String,
    null_config: NullConfig,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, null_config: NullConfig) -> Self {
        let path = path.into();
        let name = name_from_location(&path.to_string_lossy()).to_string();
        Self {
            path,
            name,
            null_config,
        }
    }
}

#[async_trait]
impl RecordSource for FileSource {
    async fn load(&self) -> Result<Dataset, DataError> {
        tracing::info!("Reading records from {:?}", self.path);
        let text = tokio::fs::read_to_string(&self.path).await?;
        parse_off_thread(self.name.clone(), text, self.null_config.clone()).await
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
