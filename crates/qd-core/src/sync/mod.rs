use std::sync::{Arc, Weak};
use parking_lot::RwLock;

/// Weakly held subscribers of one piece of shared state.
///
/// Stores hold their subscribers weakly so a view that goes away never has
/// to unregister itself; dead entries are dropped on the next notification.
pub struct SubscriberList<S: ?Sized> {
    subscribers: RwLock<Vec<Weak<S>>>,
}

impl<S: ?Sized> SubscriberList<S> {
    /// Create an empty subscriber list
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Add a subscriber. The caller keeps the strong reference alive.
    pub fn add(&self, subscriber: &Arc<S>) {
        self.subscribers.write().push(Arc::downgrade(subscriber));
    }

    /// Number of subscribers that are still alive
    pub fn live_count(&self) -> usize {
        self.subscribers
            .read()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Call `f` for every live subscriber.
    ///
    /// The list lock is released before any callback runs, so a subscriber
    /// may read the store or add further subscribers while being notified.
    pub fn notify(&self, mut f: impl FnMut(&S)) {
        let live: Vec<Arc<S>> = {
            let mut subscribers = self.subscribers.write();

            // Remove any dead weak references
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for subscriber in live {
            f(&subscriber);
        }
    }
}

impl<S: ?Sized> Default for SubscriberList<S> {
    fn default() -> Self {
        Self::new()
    }
}
