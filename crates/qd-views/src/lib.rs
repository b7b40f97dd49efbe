//! View system for the seismic event dashboard

mod space_view;
mod viewport;
pub mod chart;
pub mod controls;
pub mod table;

#[cfg(test)]
mod headless;

pub use space_view::{SpaceView, SpaceViewId};
pub use viewport::{Viewport, DEFAULT_SPLIT};
pub use chart::{ChartConfig, ChartView, PlotPoint, PointTier};
pub use table::{RowInteraction, RowStyle, TableConfig, TableView};

use std::sync::Arc;
use qd_core::{AxisSelection, AxisSelectionStore, AxisSubscriber, PointSelectionStore, RecordId, SelectionSubscriber};
use qd_data::Dataset;

/// Context passed to views during rendering.
///
/// Built once per loaded dataset. The axis store outlives it; the point
/// selection store is scoped to the dataset it indexes into.
#[derive(Clone)]
pub struct ViewerContext {
    /// Loaded records, shared read-only
    pub dataset: Arc<Dataset>,

    /// Process-wide axis selection
    pub axes: Arc<AxisSelectionStore>,

    /// Selected record shared by chart and table
    pub selection: Arc<PointSelectionStore>,
}

impl ViewerContext {
    /// Create a context with a fresh, empty point selection
    pub fn new(dataset: Arc<Dataset>, axes: Arc<AxisSelectionStore>) -> Self {
        Self {
            dataset,
            axes,
            selection: Arc::new(PointSelectionStore::new()),
        }
    }
}

/// Subscriber that schedules a new frame whenever shared state changes
pub struct RepaintOnChange {
    ctx: egui::Context,
}

impl RepaintOnChange {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl AxisSubscriber for RepaintOnChange {
    fn on_axes_change(&self, _axes: &AxisSelection) {
        self.ctx.request_repaint();
    }
}

impl SelectionSubscriber for RepaintOnChange {
    fn on_selection_change(&self, _selected: Option<RecordId>) {
        self.ctx.request_repaint();
    }
}
