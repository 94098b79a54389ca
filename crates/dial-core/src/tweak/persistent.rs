//! Editable tweaks with write-through persistence.

use std::fmt;
use std::sync::Arc;

use crate::constraint::PossibleValues;
use crate::observe::{SubscriptionId, ValueObserver};
use crate::store::PersistentStore;
use crate::tweak::{EditableTweak, MutableTweak, Tweak, TweakResult};
use crate::value::TweakValue;

/// A [`MutableTweak`] whose current value is mirrored to a persistent store
/// under the tweak's identifier.
///
/// At construction the store is read: a stored value becomes the initial
/// current value (no notification is dispatched, since no observer can be
/// registered yet); an absent key leaves the tweak unset. Every later write
/// is mirrored synchronously before the mutating call returns. A failed
/// store write is logged and swallowed; the in-memory value stays
/// authoritative for the rest of the process lifetime.
pub struct PersistentTweak {
    inner: MutableTweak,
    store: Arc<dyn PersistentStore>,
}

impl PersistentTweak {
    /// Create a persistent tweak, loading any stored value for its
    /// identifier. Fails on an empty identifier or name.
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<TweakValue>,
        store: Arc<dyn PersistentStore>,
    ) -> TweakResult<Self> {
        let inner = MutableTweak::new(identifier, name, default_value)?;
        if let Some(stored) = store.get(inner.identifier()) {
            inner.seed_current_value(stored);
        }
        Ok(Self { inner, store })
    }

    fn write_through(&self, value: &Option<TweakValue>) {
        let result = match value {
            Some(value) => self.store.set(self.inner.identifier(), value),
            None => self.store.remove(self.inner.identifier()),
        };
        if let Err(error) = result {
            tracing::warn!(
                identifier = self.inner.identifier(),
                %error,
                "persistent store write failed; in-memory value stays authoritative"
            );
        }
    }
}

impl Tweak for PersistentTweak {
    fn identifier(&self) -> &str {
        self.inner.identifier()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn current_value(&self) -> Option<TweakValue> {
        self.inner.current_value()
    }
}

impl EditableTweak for PersistentTweak {
    fn set_current_value(&self, value: Option<TweakValue>) {
        self.inner.set_current_value(value.clone());
        self.write_through(&value);
    }

    fn default_value(&self) -> TweakValue {
        self.inner.default_value()
    }

    fn possible_values(&self) -> PossibleValues {
        self.inner.possible_values()
    }

    fn set_possible_values(&self, possible: PossibleValues) {
        self.inner.set_possible_values(possible);
    }

    fn minimum_value(&self) -> Option<TweakValue> {
        self.inner.minimum_value()
    }

    fn set_minimum_value(&self, value: Option<TweakValue>) {
        self.inner.set_minimum_value(value);
    }

    fn maximum_value(&self) -> Option<TweakValue> {
        self.inner.maximum_value()
    }

    fn set_maximum_value(&self, value: Option<TweakValue>) {
        self.inner.set_maximum_value(value);
    }

    fn step_value(&self) -> Option<TweakValue> {
        self.inner.step_value()
    }

    fn set_step_value(&self, value: Option<TweakValue>) {
        self.inner.set_step_value(value);
    }

    fn precision_value(&self) -> Option<TweakValue> {
        self.inner.precision_value()
    }

    fn set_precision_value(&self, value: Option<TweakValue>) {
        self.inner.set_precision_value(value);
    }

    fn reset(&self) {
        // Route through our own setter so the reset is written through too.
        self.set_current_value(Some(self.inner.default_value()));
    }

    fn subscribe(&self, observer: ValueObserver) -> SubscriptionId {
        self.inner.subscribe(observer)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}

impl fmt::Debug for PersistentTweak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentTweak")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
