//! Core functionality for the seismic event dashboard
//!
//! This crate provides the shared state that chart, table and control
//! widgets synchronize on: the axis selection and the point selection.

pub mod axis;
pub mod selection;
pub mod sync;

// Re-export commonly used types
pub use axis::{AxisKey, AxisSelection, AxisSelectionStore, AxisSubscriber};
pub use selection::{toggle_target, PointSelectionStore, RecordId, SelectionSubscriber};
pub use sync::SubscriberList;
