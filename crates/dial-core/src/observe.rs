//! Explicit change observation.
//!
//! Every observable surface in the registry (tweak values, collection and
//! category structure) exposes subscribe/unsubscribe operations backed by an
//! [`ObserverRegistry`]. Delivery is synchronous on the mutating context:
//! `notify` runs every observer inline before the mutating call returns, so
//! observers must not block indefinitely.
//!
//! The registry releases its internal lock before invoking observers. An
//! observer may therefore read the observed value, or subscribe and
//! unsubscribe, from inside a notification without deadlocking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::value::TweakValue;

/// A cancellable handle returned by a subscribe operation.
///
/// Ids are unique across the process, so a handle from one registry can
/// never accidentally cancel a subscription on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A shared observer callback for events of type `E`.
pub type Observer<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// An observer of tweak value changes.
pub type ValueObserver = Observer<ValueChange>;

/// A set of observers with synchronous, in-order delivery.
pub struct ObserverRegistry<E> {
    observers: Mutex<Vec<(SubscriptionId, Observer<E>)>>,
}

impl<E> ObserverRegistry<E> {
    pub fn new() -> Self {
        Self {
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Register an observer and return its cancellation handle.
    pub fn subscribe(&self, observer: Observer<E>) -> SubscriptionId {
        let id = SubscriptionId::next();
        self.observers.lock().push((id, observer));
        id
    }

    /// Remove a previously registered observer.
    ///
    /// Returns `false` when the handle is unknown (already cancelled, or
    /// issued by a different registry).
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.lock();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    /// Deliver `event` to every observer, in subscription order.
    pub fn notify(&self, event: &E) {
        // Snapshot under the lock, invoke outside it.
        let snapshot: Vec<Observer<E>> = self
            .observers
            .lock()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in snapshot {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Default for ObserverRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

// Callbacks are opaque; only the observer count is printable.
impl<E> fmt::Debug for ObserverRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}

/// A successful write to an editable tweak's current value.
///
/// Both the old and new value are carried in the event, so an observer can
/// act on the transition without racing a separate read.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChange {
    /// Identifier of the tweak that changed.
    pub identifier: String,
    /// The value before the write (`None` = unset).
    pub old: Option<TweakValue>,
    /// The value after the write (`None` = unset).
    pub new: Option<TweakValue>,
}

/// A structural change to a collection's tweak sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionChange {
    TweakAdded { identifier: String },
    TweakRemoved { identifier: String },
}

/// A structural change to a category's collection sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChange {
    CollectionAdded { name: String },
    CollectionRemoved { name: String },
    /// A remote update completed successfully and the collections were
    /// replaced wholesale.
    Updated,
}

/// A structural change to the registry's category sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryChange {
    CategoryAdded { name: String },
    CategoryRemoved { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_notify_delivers_in_subscription_order() {
        let registry: ObserverRegistry<String> = ObserverRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let seen = Arc::clone(&seen);
            registry.subscribe(Arc::new(move |event: &String| {
                seen.lock().push(format!("{tag}:{event}"));
            }));
        }

        registry.notify(&"hello".to_string());
        assert_eq!(
            *seen.lock(),
            vec!["first:hello", "second:hello", "third:hello"]
        );
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let registry: ObserverRegistry<u32> = ObserverRegistry::new();
        let count = Arc::new(Mutex::new(0));

        let counter = Arc::clone(&count);
        let id = registry.subscribe(Arc::new(move |_| *counter.lock() += 1));

        registry.notify(&1);
        assert!(registry.unsubscribe(id));
        registry.notify(&2);

        assert_eq!(*count.lock(), 1);
        assert!(!registry.unsubscribe(id), "second cancel is a no-op");
    }

    #[test]
    fn test_subscribe_from_inside_notification_does_not_deadlock() {
        let registry: Arc<ObserverRegistry<u32>> = Arc::new(ObserverRegistry::new());
        let inner = Arc::clone(&registry);
        registry.subscribe(Arc::new(move |_| {
            inner.subscribe(Arc::new(|_| {}));
        }));

        registry.notify(&0);
        assert_eq!(registry.len(), 2);
    }
}
