//! Root composer: owns the load lifecycle of the dashboard

use std::sync::Arc;
use parking_lot::RwLock;
use tracing::{error, info};

use qd_data::{DataError, Dataset, RecordSource};

/// Where the dashboard is in its single load attempt
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    /// Terminal; carries the user-facing message
    Error(String),
    /// Terminal; the batch every view reads from
    Ready(Arc<Dataset>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Message shown for a failed load
pub fn failure_message(error: &DataError) -> String {
    format!("Failed to load data. Details: {}", error)
}

/// Shared handle on the load state.
///
/// Cloning is cheap; the background task and the UI hold the same state.
#[derive(Clone)]
pub struct Composer {
    state: Arc<RwLock<LoadState>>,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(LoadState::Loading)),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> LoadState {
        self.state.read().clone()
    }

    /// Apply the outcome of the load.
    ///
    /// Only the first outcome is applied; returns whether this call did it.
    pub fn complete(&self, source_name: &str, result: Result<Dataset, DataError>) -> bool {
        let mut state = self.state.write();
        if !state.is_loading() {
            return false;
        }

        match result {
            Ok(dataset) => {
                info!(
                    "Loaded {} records ({} columns) from {}",
                    dataset.len(),
                    dataset.columns().len(),
                    source_name
                );
                *state = LoadState::Ready(Arc::new(dataset));
            }
            Err(e) => {
                error!("Failed to load {}: {}", source_name, e);
                *state = LoadState::Error(failure_message(&e));
            }
        }
        true
    }

    /// Run the source to completion and apply its outcome
    pub async fn load(&self, source: &dyn RecordSource) -> bool {
        info!("Loading records from {}", source.source_name());
        let result = source.load().await;
        self.complete(source.source_name(), result)
    }

    /// Start the load on `runtime`; `on_done` runs after the state changed
    pub fn spawn_load<F>(&self, runtime: &tokio::runtime::Handle, source: Box<dyn RecordSource>, on_done: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let composer = self.clone();
        runtime.spawn(async move {
            composer.load(source.as_ref()).await;
            on_done();
        });
    }
}
