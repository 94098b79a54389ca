//! Named, ordered collections of tweaks.

use thiserror::Error;

use crate::observe::{CollectionChange, Observer, ObserverRegistry, SubscriptionId};
use crate::tweak::TweakEntry;

/// Errors from mutating a collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The collection already holds a tweak with this identifier. The
    /// existing entry is kept and the sequence is unchanged.
    #[error("duplicate tweak identifier: {identifier}")]
    DuplicateIdentifier { identifier: String },
}

/// A named, insertion-ordered set of tweaks, unique by identifier.
///
/// Order is part of observable state: iteration and display follow
/// insertion order, and nothing else hangs off it. Structural changes
/// (add/remove) notify collection subscribers; value changes flow only
/// through each tweak's own observers.
#[derive(Debug)]
pub struct TweakCollection {
    name: String,
    entries: Vec<TweakEntry>,
    observers: ObserverRegistry<CollectionChange>,
}

impl TweakCollection {
    /// Create an empty collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Create a collection from an initial tweak sequence. Fails on a
    /// duplicate identifier within the sequence.
    pub fn with_tweaks(
        name: impl Into<String>,
        tweaks: impl IntoIterator<Item = TweakEntry>,
    ) -> Result<Self, CollectionError> {
        let mut collection = Self::new(name);
        for entry in tweaks {
            collection.insert(entry)?;
        }
        Ok(collection)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tweaks in this collection, in insertion order.
    pub fn tweaks(&self) -> &[TweakEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fetch a tweak by identifier. `None` when absent.
    pub fn tweak_with_identifier(&self, identifier: &str) -> Option<&TweakEntry> {
        self.entries
            .iter()
            .find(|entry| entry.identifier() == identifier)
    }

    /// Add a tweak to the collection.
    ///
    /// A duplicate identifier is rejected and the sequence left unchanged.
    pub fn add_tweak(&mut self, tweak: impl Into<TweakEntry>) -> Result<(), CollectionError> {
        let entry = tweak.into();
        let identifier = entry.identifier().to_string();
        self.insert(entry)?;
        self.observers
            .notify(&CollectionChange::TweakAdded { identifier });
        Ok(())
    }

    /// Remove the tweak with `identifier`. No-op `None` when absent.
    ///
    /// Identifiers are unique within a collection, so identifier equality
    /// coincides with identity here.
    pub fn remove_tweak(&mut self, identifier: &str) -> Option<TweakEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.identifier() == identifier)?;
        let removed = self.entries.remove(index);
        self.observers.notify(&CollectionChange::TweakRemoved {
            identifier: identifier.to_string(),
        });
        Some(removed)
    }

    /// Observe structural changes to this collection.
    pub fn subscribe(&self, observer: Observer<CollectionChange>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn insert(&mut self, entry: TweakEntry) -> Result<(), CollectionError> {
        if self.tweak_with_identifier(entry.identifier()).is_some() {
            return Err(CollectionError::DuplicateIdentifier {
                identifier: entry.identifier().to_string(),
            });
        }
        self.entries.push(entry);
        Ok(())
    }
}
