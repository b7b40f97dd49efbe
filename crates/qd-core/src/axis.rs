//! Axis selection: which two numeric record fields the chart plots

use std::fmt;
use std::sync::Arc;
use parking_lot::RwLock;
use serde::{Serialize, Deserialize};

use crate::sync::SubscriberList;

/// A numeric record field that can be mapped to a chart axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKey {
    Latitude,
    Longitude,
    Depth,
    Mag,
}

impl AxisKey {
    /// Every plottable field, in picker order
    pub const ALL: [AxisKey; 4] = [
        AxisKey::Latitude,
        AxisKey::Longitude,
        AxisKey::Depth,
        AxisKey::Mag,
    ];

    /// Column name of the field in the source data
    pub fn field_name(self) -> &'static str {
        match self {
            AxisKey::Latitude => "latitude",
            AxisKey::Longitude => "longitude",
            AxisKey::Depth => "depth",
            AxisKey::Mag => "mag",
        }
    }

    /// Upper-cased label used by pickers and axis titles
    pub fn label(self) -> &'static str {
        match self {
            AxisKey::Latitude => "LATITUDE",
            AxisKey::Longitude => "LONGITUDE",
            AxisKey::Depth => "DEPTH",
            AxisKey::Mag => "MAG",
        }
    }
}

impl fmt::Display for AxisKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// The pair of fields currently plotted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    pub x: AxisKey,
    pub y: AxisKey,
}

impl Default for AxisSelection {
    fn default() -> Self {
        Self {
            x: AxisKey::Longitude,
            y: AxisKey::Latitude,
        }
    }
}

/// Trait for components that need to respond to axis changes
pub trait AxisSubscriber: Send + Sync {
    /// Called after the X or Y field changed
    fn on_axes_change(&self, axes: &AxisSelection);
}

#[derive(Debug, Clone, Copy)]
struct AxisState {
    axes: AxisSelection,
    revision: u64,
}

/// Process-wide store for the axis selection.
///
/// The store does not check that X and Y differ; the axis controls keep the
/// Y options free of the current X value.
pub struct AxisSelectionStore {
    state: RwLock<AxisState>,
    subscribers: SubscriberList<dyn AxisSubscriber>,
}

impl AxisSelectionStore {
    /// Create a store holding the default `(longitude, latitude)` pair
    pub fn new() -> Self {
        Self::with_axes(AxisSelection::default())
    }

    /// Create a store holding `axes`
    pub fn with_axes(axes: AxisSelection) -> Self {
        Self {
            state: RwLock::new(AxisState { axes, revision: 0 }),
            subscribers: SubscriberList::new(),
        }
    }

    /// Current axis selection
    pub fn axes(&self) -> AxisSelection {
        self.state.read().axes
    }

    /// Number of changes applied since creation
    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }

    /// Select the horizontal axis; subscribers hear only actual changes
    pub fn set_x_axis(&self, key: AxisKey) {
        self.update(|axes| axes.x = key);
    }

    /// Select the vertical axis; subscribers hear only actual changes
    pub fn set_y_axis(&self, key: AxisKey) {
        self.update(|axes| axes.y = key);
    }

    /// Add a subscriber. Held weakly; the caller keeps it alive.
    pub fn add_subscriber(&self, subscriber: Arc<dyn AxisSubscriber>) {
        self.subscribers.add(&subscriber);
    }

    fn update(&self, apply: impl FnOnce(&mut AxisSelection)) {
        let mut state = self.state.write();
        let before = state.axes;
        apply(&mut state.axes);
        if state.axes == before {
            return;
        }
        state.revision += 1;
        let axes = state.axes;
        drop(state);

        tracing::debug!("Axes changed: {} vs {}", axes.x, axes.y);
        self.subscribers.notify(|subscriber| subscriber.on_axes_change(&axes));
    }
}

impl Default for AxisSelectionStore {
    fn default() -> Self {
        Self::new()
    }
}
