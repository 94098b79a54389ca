//! Named categories of collections, the unit of remote synchronization.

use thiserror::Error;

use crate::collection::TweakCollection;
use crate::observe::{CategoryChange, Observer, ObserverRegistry, SubscriptionId};
use crate::update::{UpdateResult, UpdateSource};

/// Errors from mutating a category.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// The category already holds a collection with this name. The existing
    /// collection is kept and the sequence is unchanged.
    #[error("duplicate collection name: {name}")]
    DuplicateCollection { name: String },
}

/// A named, insertion-ordered set of collections, unique by name.
///
/// The category fans bulk operations out top-down: [`reset`] walks every
/// collection in order and resets each editable tweak, and [`update`]
/// synchronizes the whole collection set against a remote source.
///
/// [`reset`]: TweakCategory::reset
/// [`update`]: TweakCategory::update
#[derive(Debug)]
pub struct TweakCategory {
    name: String,
    collections: Vec<TweakCollection>,
    observers: ObserverRegistry<CategoryChange>,
}

impl TweakCategory {
    /// Create an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: Vec::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Create a category from an initial collection sequence. Fails on a
    /// duplicate name within the sequence.
    pub fn with_collections(
        name: impl Into<String>,
        collections: impl IntoIterator<Item = TweakCollection>,
    ) -> Result<Self, CategoryError> {
        let mut category = Self::new(name);
        for collection in collections {
            category.insert(collection)?;
        }
        Ok(category)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The collections in this category, in insertion order.
    pub fn collections(&self) -> &[TweakCollection] {
        &self.collections
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Fetch a collection by name. `None` when absent.
    pub fn collection_with_name(&self, name: &str) -> Option<&TweakCollection> {
        self.collections
            .iter()
            .find(|collection| collection.name() == name)
    }

    /// Fetch a collection by name for structural mutation.
    pub fn collection_with_name_mut(&mut self, name: &str) -> Option<&mut TweakCollection> {
        self.collections
            .iter_mut()
            .find(|collection| collection.name() == name)
    }

    /// Add a collection to the category.
    ///
    /// A duplicate name is rejected and the sequence left unchanged.
    pub fn add_collection(&mut self, collection: TweakCollection) -> Result<(), CategoryError> {
        let name = collection.name().to_string();
        self.insert(collection)?;
        self.observers
            .notify(&CategoryChange::CollectionAdded { name });
        Ok(())
    }

    /// Remove the collection named `name`. No-op `None` when absent.
    pub fn remove_collection(&mut self, name: &str) -> Option<TweakCollection> {
        let index = self
            .collections
            .iter()
            .position(|collection| collection.name() == name)?;
        let removed = self.collections.remove(index);
        self.observers.notify(&CategoryChange::CollectionRemoved {
            name: name.to_string(),
        });
        Some(removed)
    }

    /// Reset every editable tweak in every collection to its default value,
    /// in collection order then tweak order. Immutable and action tweaks
    /// are skipped: reset only applies where a reset capability exists.
    pub fn reset(&self) {
        for collection in &self.collections {
            for entry in collection.tweaks() {
                if let Some(tweak) = entry.as_editable() {
                    tweak.reset();
                }
            }
        }
    }

    /// Replace this category's collections with the latest remote state.
    ///
    /// The fetch covers all collections at once and is all-or-nothing: on
    /// success the collection list is swapped wholesale and a
    /// [`CategoryChange::Updated`] is delivered; on failure the error is
    /// returned and the category's visible state is untouched — a partial
    /// update is never observable. The result is resolved exactly once, on
    /// the caller's own context.
    ///
    /// Overlapping updates are not deduplicated here; `&mut self` already
    /// prevents them within a single registry tree, and a host that shares
    /// a category across tasks owns its own single-flight policy.
    pub async fn update(&mut self, source: &dyn UpdateSource) -> UpdateResult<()> {
        tracing::debug!(category = %self.name, "category update started");
        match source.fetch_collections(&self.name).await {
            Ok(collections) => {
                self.collections = collections;
                tracing::debug!(
                    category = %self.name,
                    collections = self.collections.len(),
                    "category update applied"
                );
                self.observers.notify(&CategoryChange::Updated);
                Ok(())
            }
            Err(error) => {
                tracing::debug!(category = %self.name, %error, "category update failed");
                Err(error)
            }
        }
    }

    /// Observe structural changes to this category.
    pub fn subscribe(&self, observer: Observer<CategoryChange>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn insert(&mut self, collection: TweakCollection) -> Result<(), CategoryError> {
        if self.collection_with_name(collection.name()).is_some() {
            return Err(CategoryError::DuplicateCollection {
                name: collection.name().to_string(),
            });
        }
        self.collections.push(collection);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tweak::{ActionTweak, EditableTweak, MutableTweak, ValueTweak};
    use crate::value::TweakValue;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_duplicate_collection_name_rejected_sequence_unchanged() {
        let mut category = TweakCategory::new("Debug");
        category
            .add_collection(TweakCollection::new("Network"))
            .unwrap();

        let err = category
            .add_collection(TweakCollection::new("Network"))
            .unwrap_err();
        assert_eq!(
            err,
            CategoryError::DuplicateCollection {
                name: "Network".to_string()
            }
        );
        assert_eq!(category.len(), 1);
    }

    #[test]
    fn test_lookup_and_remove() {
        let mut category = TweakCategory::new("Debug");
        category
            .add_collection(TweakCollection::new("Network"))
            .unwrap();

        assert!(category.collection_with_name("Network").is_some());
        assert!(category.collection_with_name("Missing").is_none());

        assert!(category.remove_collection("Network").is_some());
        assert!(category.remove_collection("Network").is_none());
        assert!(category.is_empty());
    }

    #[test]
    fn test_structural_notifications() {
        let mut category = TweakCategory::new("Debug");
        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&changes);
        category.subscribe(Arc::new(move |change: &CategoryChange| {
            sink.lock().push(change.clone());
        }));

        category
            .add_collection(TweakCollection::new("Network"))
            .unwrap();
        // Rejected duplicate must not notify.
        let _ = category.add_collection(TweakCollection::new("Network"));
        category.remove_collection("Network");
        // Removing an absent collection is silent too.
        category.remove_collection("Network");

        assert_eq!(
            *changes.lock(),
            vec![
                CategoryChange::CollectionAdded {
                    name: "Network".to_string()
                },
                CategoryChange::CollectionRemoved {
                    name: "Network".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_reset_skips_non_editable_tweaks() {
        // Category "Feature Flags" with two collections; reset touches the
        // editable tweaks in both and skips plain values and actions.
        let dark_mode: Arc<dyn EditableTweak> =
            Arc::new(MutableTweak::new("flags.dark", "Dark mode", false).unwrap());
        let limit: Arc<dyn EditableTweak> =
            Arc::new(MutableTweak::new("limits.max", "Max items", 100).unwrap());

        let mut first = TweakCollection::new("Flags");
        first.add_tweak(Arc::clone(&dark_mode)).unwrap();
        first
            .add_tweak(ValueTweak::new("flags.build", "Build", "abc123").unwrap())
            .unwrap();

        let mut second = TweakCollection::new("Limits");
        second.add_tweak(Arc::clone(&limit)).unwrap();
        second
            .add_tweak(ActionTweak::new("limits.purge", "Purge", || {}).unwrap())
            .unwrap();

        let category =
            TweakCategory::with_collections("Feature Flags", vec![first, second]).unwrap();

        dark_mode.set_current_value(Some(TweakValue::Bool(true)));
        limit.set_current_value(Some(TweakValue::Int(5)));

        category.reset();

        assert_eq!(dark_mode.current_value(), Some(TweakValue::Bool(false)));
        assert_eq!(limit.current_value(), Some(TweakValue::Int(100)));
        // Non-editable entries are untouched by reset.
        let flags = category.collection_with_name("Flags").unwrap();
        assert_eq!(
            flags
                .tweak_with_identifier("flags.build")
                .unwrap()
                .current_value(),
            Some(TweakValue::from("abc123"))
        );
        let limits = category.collection_with_name("Limits").unwrap();
        assert_eq!(
            limits
                .tweak_with_identifier("limits.purge")
                .unwrap()
                .current_value(),
            None
        );
    }
}
