//! Tweak variants.
//!
//! A tweak is a single named, identified configurable value or action. The
//! variant set is closed:
//!
//! - [`ValueTweak`]: identifier + name + fixed value, immutable after
//!   construction.
//! - [`ActionTweak`]: identifier + name + a zero-argument block of work.
//! - [`MutableTweak`]: the default [`EditableTweak`] implementation, with
//!   observable writes and an advisory constraint.
//! - [`PersistentTweak`]: a [`MutableTweak`] whose value is mirrored to a
//!   [`PersistentStore`](crate::store::PersistentStore) keyed by its
//!   identifier.
//!
//! Identifiers and names are opaque, non-empty strings. The identifier is
//! the persistence and lookup key; uniqueness within a collection is the
//! collection's job, not the tweak's.

mod action;
mod entry;
mod mutable;
mod persistent;

pub use action::ActionTweak;
pub use entry::TweakEntry;
pub use mutable::MutableTweak;
pub use persistent::PersistentTweak;

use thiserror::Error;

use crate::constraint::PossibleValues;
use crate::observe::{SubscriptionId, ValueObserver};
use crate::value::TweakValue;

/// Result type for tweak construction.
pub type TweakResult<T> = Result<T, TweakError>;

/// Errors from constructing a tweak.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TweakError {
    #[error("tweak identifier must not be empty")]
    EmptyIdentifier,

    #[error("tweak name must not be empty")]
    EmptyName,
}

pub(crate) fn validate_naming(identifier: &str, name: &str) -> TweakResult<()> {
    if identifier.is_empty() {
        return Err(TweakError::EmptyIdentifier);
    }
    if name.is_empty() {
        return Err(TweakError::EmptyName);
    }
    Ok(())
}

/// A single named, identified tweak.
pub trait Tweak: Send + Sync {
    /// This tweak's unique identifier.
    fn identifier(&self) -> &str;

    /// The human-readable name of the tweak.
    fn name(&self) -> &str;

    /// The current value of the tweak. `None` means unset for editable
    /// tweaks, and always `None` for action tweaks.
    fn current_value(&self) -> Option<TweakValue>;
}

/// An editable tweak: mutable current value, a default, an advisory
/// constraint, and observable writes.
///
/// This is a data holder, not a validator. Neither the constraint nor the
/// numeric editing hints are enforced on write; editors are expected to
/// pre-validate.
pub trait EditableTweak: Tweak {
    /// Write the current value. `None` marks the tweak unset.
    ///
    /// Every write dispatches exactly one synchronous [`ValueChange`]
    /// carrying the old and new value, after the field has changed.
    ///
    /// [`ValueChange`]: crate::observe::ValueChange
    fn set_current_value(&self, value: Option<TweakValue>);

    /// The default value. Always present; whether to substitute it for an
    /// unset current value is the caller's decision.
    fn default_value(&self) -> TweakValue;

    /// The current value, or the default when unset.
    fn value_or_default(&self) -> TweakValue {
        self.current_value()
            .unwrap_or_else(|| self.default_value())
    }

    /// The allowed-value constraint for editors.
    fn possible_values(&self) -> PossibleValues;

    fn set_possible_values(&self, possible: PossibleValues);

    /// Minimum value hint for numeric editors. `None` means no minimum.
    fn minimum_value(&self) -> Option<TweakValue>;

    fn set_minimum_value(&self, value: Option<TweakValue>);

    /// Maximum value hint for numeric editors. `None` means no maximum.
    fn maximum_value(&self) -> Option<TweakValue>;

    fn set_maximum_value(&self, value: Option<TweakValue>);

    /// Step hint for numeric editors. `None` lets the editor choose.
    fn step_value(&self) -> Option<TweakValue>;

    fn set_step_value(&self, value: Option<TweakValue>);

    /// Decimal precision hint for numeric editors.
    fn precision_value(&self) -> Option<TweakValue>;

    fn set_precision_value(&self, value: Option<TweakValue>);

    /// Set the current value back to the default, through the same
    /// notification (and write-through) path as any other write.
    fn reset(&self);

    /// Observe writes to the current value. Delivery is synchronous on the
    /// mutating context.
    fn subscribe(&self, observer: ValueObserver) -> SubscriptionId;

    /// Cancel a subscription. Returns `false` for an unknown handle.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// An immutable tweak: its value is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTweak {
    identifier: String,
    name: String,
    value: TweakValue,
}

impl ValueTweak {
    /// Create an immutable tweak. Fails on an empty identifier or name.
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<TweakValue>,
    ) -> TweakResult<Self> {
        let identifier = identifier.into();
        let name = name.into();
        validate_naming(&identifier, &name)?;
        Ok(Self {
            identifier,
            name,
            value: value.into(),
        })
    }
}

impl Tweak for ValueTweak {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn current_value(&self) -> Option<TweakValue> {
        Some(self.value.clone())
    }
}
