//! The default editable tweak.

use parking_lot::Mutex;

use crate::constraint::PossibleValues;
use crate::observe::{ObserverRegistry, SubscriptionId, ValueChange, ValueObserver};
use crate::tweak::{validate_naming, EditableTweak, Tweak, TweakResult};
use crate::value::TweakValue;

#[derive(Debug, Default)]
struct EditableState {
    current_value: Option<TweakValue>,
    possible_values: PossibleValues,
    minimum_value: Option<TweakValue>,
    maximum_value: Option<TweakValue>,
    step_value: Option<TweakValue>,
    precision_value: Option<TweakValue>,
}

/// The default [`EditableTweak`] implementation.
///
/// The current value starts unset. Every write notifies observers
/// synchronously with the old and new value; the state lock is released
/// before observers run, so an observer may re-read the tweak from inside
/// its notification. Constraints and numeric hints are held but never
/// enforced.
#[derive(Debug)]
pub struct MutableTweak {
    identifier: String,
    name: String,
    default_value: TweakValue,
    state: Mutex<EditableState>,
    observers: ObserverRegistry<ValueChange>,
}

impl MutableTweak {
    /// Create an editable tweak with an unset current value. Fails on an
    /// empty identifier or name.
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<TweakValue>,
    ) -> TweakResult<Self> {
        let identifier = identifier.into();
        let name = name.into();
        validate_naming(&identifier, &name)?;
        Ok(Self {
            identifier,
            name,
            default_value: default_value.into(),
            state: Mutex::new(EditableState::default()),
            observers: ObserverRegistry::new(),
        })
    }

    /// Seed the current value without notifying.
    ///
    /// Only for construction-time population from a persistent store, when
    /// no observer can exist yet.
    pub(crate) fn seed_current_value(&self, value: TweakValue) {
        self.state.lock().current_value = Some(value);
    }

    fn write_current_value(&self, value: Option<TweakValue>) {
        let old = {
            let mut state = self.state.lock();
            std::mem::replace(&mut state.current_value, value.clone())
        };
        // Lock released; observers may read the new value back.
        self.observers.notify(&ValueChange {
            identifier: self.identifier.clone(),
            old,
            new: value,
        });
    }
}

impl Tweak for MutableTweak {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn current_value(&self) -> Option<TweakValue> {
        self.state.lock().current_value.clone()
    }
}

impl EditableTweak for MutableTweak {
    fn set_current_value(&self, value: Option<TweakValue>) {
        self.write_current_value(value);
    }

    fn default_value(&self) -> TweakValue {
        self.default_value.clone()
    }

    fn possible_values(&self) -> PossibleValues {
        self.state.lock().possible_values.clone()
    }

    fn set_possible_values(&self, possible: PossibleValues) {
        self.state.lock().possible_values = possible;
    }

    fn minimum_value(&self) -> Option<TweakValue> {
        self.state.lock().minimum_value.clone()
    }

    fn set_minimum_value(&self, value: Option<TweakValue>) {
        self.state.lock().minimum_value = value;
    }

    fn maximum_value(&self) -> Option<TweakValue> {
        self.state.lock().maximum_value.clone()
    }

    fn set_maximum_value(&self, value: Option<TweakValue>) {
        self.state.lock().maximum_value = value;
    }

    fn step_value(&self) -> Option<TweakValue> {
        self.state.lock().step_value.clone()
    }

    fn set_step_value(&self, value: Option<TweakValue>) {
        self.state.lock().step_value = value;
    }

    fn precision_value(&self) -> Option<TweakValue> {
        self.state.lock().precision_value.clone()
    }

    fn set_precision_value(&self, value: Option<TweakValue>) {
        self.state.lock().precision_value = value;
    }

    fn reset(&self) {
        self.write_current_value(Some(self.default_value.clone()));
    }

    fn subscribe(&self, observer: ValueObserver) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
