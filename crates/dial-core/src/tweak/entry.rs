//! The closed set of tweak variants a collection can hold.

use std::fmt;
use std::sync::Arc;

use crate::tweak::{ActionTweak, EditableTweak, MutableTweak, PersistentTweak, Tweak, ValueTweak};
use crate::value::TweakValue;

/// One tweak as held by a collection.
///
/// Editable tweaks are shared: a host keeps its own `Arc` to read and write
/// the tweak while the collection holds another. Reset fan-out reaches only
/// the `Editable` variant; the other two are skipped by design.
pub enum TweakEntry {
    Value(ValueTweak),
    Action(ActionTweak),
    Editable(Arc<dyn EditableTweak>),
}

impl TweakEntry {
    pub fn identifier(&self) -> &str {
        match self {
            Self::Value(tweak) => tweak.identifier(),
            Self::Action(tweak) => tweak.identifier(),
            Self::Editable(tweak) => tweak.identifier(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Value(tweak) => tweak.name(),
            Self::Action(tweak) => tweak.name(),
            Self::Editable(tweak) => tweak.name(),
        }
    }

    pub fn current_value(&self) -> Option<TweakValue> {
        match self {
            Self::Value(tweak) => tweak.current_value(),
            Self::Action(tweak) => tweak.current_value(),
            Self::Editable(tweak) => tweak.current_value(),
        }
    }

    /// The editable tweak behind this entry, if it is one.
    pub fn as_editable(&self) -> Option<&Arc<dyn EditableTweak>> {
        match self {
            Self::Editable(tweak) => Some(tweak),
            _ => None,
        }
    }

    /// The action tweak behind this entry, if it is one.
    pub fn as_action(&self) -> Option<&ActionTweak> {
        match self {
            Self::Action(tweak) => Some(tweak),
            _ => None,
        }
    }
}

impl From<ValueTweak> for TweakEntry {
    fn from(tweak: ValueTweak) -> Self {
        Self::Value(tweak)
    }
}

impl From<ActionTweak> for TweakEntry {
    fn from(tweak: ActionTweak) -> Self {
        Self::Action(tweak)
    }
}

impl From<MutableTweak> for TweakEntry {
    fn from(tweak: MutableTweak) -> Self {
        Self::Editable(Arc::new(tweak))
    }
}

impl From<PersistentTweak> for TweakEntry {
    fn from(tweak: PersistentTweak) -> Self {
        Self::Editable(Arc::new(tweak))
    }
}

impl From<Arc<dyn EditableTweak>> for TweakEntry {
    fn from(tweak: Arc<dyn EditableTweak>) -> Self {
        Self::Editable(tweak)
    }
}

impl fmt::Debug for TweakEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            Self::Value(_) => "Value",
            Self::Action(_) => "Action",
            Self::Editable(_) => "Editable",
        };
        f.debug_struct("TweakEntry")
            .field("variant", &variant)
            .field("identifier", &self.identifier())
            .field("current_value", &self.current_value())
            .finish()
    }
}
