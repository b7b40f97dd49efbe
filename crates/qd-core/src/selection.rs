//! Point selection shared by the chart and the table

use std::fmt;
use std::sync::Arc;
use parking_lot::RwLock;
use serde::{Serialize, Deserialize};

use crate::sync::SubscriberList;

/// Identifier of a record within one loaded batch (1-based, file order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selection that results from clicking `clicked` while `current` is selected.
///
/// Clicking the selected record clears the selection, clicking any other
/// record replaces it.
pub fn toggle_target(current: Option<RecordId>, clicked: RecordId) -> Option<RecordId> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Trait for components that need to respond to selection changes
pub trait SelectionSubscriber: Send + Sync {
    /// Called after the selected record changed
    fn on_selection_change(&self, selected: Option<RecordId>);
}

#[derive(Debug, Clone, Copy, Default)]
struct SelectionState {
    selected: Option<RecordId>,
    revision: u64,
}

/// Store for the currently highlighted record.
///
/// Hover and click both write this single slot; there is no separate
/// preview selection.
pub struct PointSelectionStore {
    state: RwLock<SelectionState>,
    subscribers: SubscriberList<dyn SelectionSubscriber>,
}

impl PointSelectionStore {
    /// Create a store with nothing selected
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SelectionState::default()),
            subscribers: SubscriberList::new(),
        }
    }

    /// Currently selected record, if any
    pub fn selected(&self) -> Option<RecordId> {
        self.state.read().selected
    }

    /// Whether `id` is the selected record
    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selected() == Some(id)
    }

    /// Number of changes applied since creation
    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }

    /// Replace the selection, notifying subscribers if it changed
    pub fn set_selected(&self, selected: Option<RecordId>) {
        let mut state = self.state.write();
        if state.selected == selected {
            return;
        }
        state.selected = selected;
        state.revision += 1;
        drop(state);

        tracing::debug!("Selection changed: {:?}", selected);
        self.subscribers.notify(|subscriber| subscriber.on_selection_change(selected));
    }

    /// Add a subscriber. Held weakly; the caller keeps it alive.
    pub fn add_subscriber(&self, subscriber: Arc<dyn SelectionSubscriber>) {
        self.subscribers.add(&subscriber);
    }
}

impl Default for PointSelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<Option<RecordId>>>,
    }

    impl SelectionSubscriber for Recorder {
        fn on_selection_change(&self, selected: Option<RecordId>) {
            self.seen.lock().push(selected);
        }
    }

    #[test]
    fn test_starts_with_nothing_selected() {
        let store = PointSelectionStore::new();
        assert_eq!(store.selected(), None);
        assert!(!store.is_selected(RecordId(1)));
    }

    #[test]
    fn test_toggle_twice_clears_selection() {
        let store = PointSelectionStore::new();

        store.set_selected(toggle_target(store.selected(), RecordId(3)));
        assert_eq!(store.selected(), Some(RecordId(3)));

        store.set_selected(toggle_target(store.selected(), RecordId(3)));
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_clicking_other_record_replaces_selection() {
        assert_eq!(toggle_target(Some(RecordId(1)), RecordId(2)), Some(RecordId(2)));
        assert_eq!(toggle_target(None, RecordId(2)), Some(RecordId(2)));
        assert_eq!(toggle_target(Some(RecordId(2)), RecordId(2)), None);
    }

    #[test]
    fn test_changes_notify_subscribers_once() {
        let store = PointSelectionStore::new();
        let recorder = Arc::new(Recorder::default());
        store.add_subscriber(recorder.clone());

        store.set_selected(Some(RecordId(7)));
        store.set_selected(Some(RecordId(7)));
        store.set_selected(None);

        assert_eq!(*recorder.seen.lock(), vec![Some(RecordId(7)), None]);
        assert_eq!(store.revision(), 2);
    }
}
