//! The root registry of categories.

use thiserror::Error;

use crate::category::TweakCategory;
use crate::observe::{Observer, ObserverRegistry, RegistryChange, SubscriptionId};

/// Errors from mutating the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry already holds a category with this name. The existing
    /// category is kept and the sequence is unchanged.
    #[error("duplicate category name: {name}")]
    DuplicateCategory { name: String },
}

/// The root of a registry tree: a name-unique, insertion-ordered set of
/// categories.
///
/// The registry is an ordinary owned value, not a process singleton; a host
/// that wants one shared tree wraps it itself. All structural mutation goes
/// through one owning context, per the registry's concurrency model.
#[derive(Debug, Default)]
pub struct TweakRegistry {
    categories: Vec<TweakCategory>,
    observers: ObserverRegistry<RegistryChange>,
}

impl TweakRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The categories in this registry, in insertion order.
    pub fn categories(&self) -> &[TweakCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Fetch a category by name. `None` when absent.
    pub fn category_with_name(&self, name: &str) -> Option<&TweakCategory> {
        self.categories
            .iter()
            .find(|category| category.name() == name)
    }

    /// Fetch a category by name for structural mutation or update.
    pub fn category_with_name_mut(&mut self, name: &str) -> Option<&mut TweakCategory> {
        self.categories
            .iter_mut()
            .find(|category| category.name() == name)
    }

    /// Add a category to the registry.
    ///
    /// A duplicate name is rejected and the sequence left unchanged.
    pub fn add_category(&mut self, category: TweakCategory) -> Result<(), RegistryError> {
        if self.category_with_name(category.name()).is_some() {
            return Err(RegistryError::DuplicateCategory {
                name: category.name().to_string(),
            });
        }
        let name = category.name().to_string();
        self.categories.push(category);
        self.observers
            .notify(&RegistryChange::CategoryAdded { name });
        Ok(())
    }

    /// Remove the category named `name`. No-op `None` when absent.
    pub fn remove_category(&mut self, name: &str) -> Option<TweakCategory> {
        let index = self
            .categories
            .iter()
            .position(|category| category.name() == name)?;
        let removed = self.categories.remove(index);
        self.observers.notify(&RegistryChange::CategoryRemoved {
            name: name.to_string(),
        });
        Some(removed)
    }

    /// Reset every editable tweak in every category.
    pub fn reset(&self) {
        for category in &self.categories {
            category.reset();
        }
    }

    /// Observe structural changes to the registry.
    pub fn subscribe(&self, observer: Observer<RegistryChange>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::TweakCollection;
    use crate::tweak::{EditableTweak, MutableTweak};
    use crate::value::TweakValue;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_duplicate_category_rejected() {
        let mut registry = TweakRegistry::new();
        registry.add_category(TweakCategory::new("Debug")).unwrap();

        let err = registry
            .add_category(TweakCategory::new("Debug"))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateCategory {
                name: "Debug".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reset_fans_out_across_categories() {
        let first: Arc<dyn EditableTweak> =
            Arc::new(MutableTweak::new("a.x", "X", 1).unwrap());
        let second: Arc<dyn EditableTweak> =
            Arc::new(MutableTweak::new("b.y", "Y", 2).unwrap());

        let mut registry = TweakRegistry::new();
        for (category_name, tweak) in [("A", &first), ("B", &second)] {
            let mut collection = TweakCollection::new("Main");
            collection.add_tweak(Arc::clone(tweak)).unwrap();
            let mut category = TweakCategory::new(category_name);
            category.add_collection(collection).unwrap();
            registry.add_category(category).unwrap();
        }

        first.set_current_value(Some(TweakValue::Int(100)));
        second.set_current_value(Some(TweakValue::Int(200)));
        registry.reset();

        assert_eq!(first.current_value(), Some(TweakValue::Int(1)));
        assert_eq!(second.current_value(), Some(TweakValue::Int(2)));
    }

    #[test]
    fn test_structural_notifications() {
        let mut registry = TweakRegistry::new();
        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&changes);
        registry.subscribe(Arc::new(move |change: &RegistryChange| {
            sink.lock().push(change.clone());
        }));

        registry.add_category(TweakCategory::new("Debug")).unwrap();
        // Rejected duplicate must not notify.
        let _ = registry.add_category(TweakCategory::new("Debug"));
        registry.remove_category("Debug");
        // Removing an absent category is silent too.
        registry.remove_category("Debug");

        assert_eq!(
            *changes.lock(),
            vec![
                RegistryChange::CategoryAdded {
                    name: "Debug".to_string()
                },
                RegistryChange::CategoryRemoved {
                    name: "Debug".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_remove_category() {
        let mut registry = TweakRegistry::new();
        registry.add_category(TweakCategory::new("Debug")).unwrap();
        assert!(registry.remove_category("Debug").is_some());
        assert!(registry.remove_category("Debug").is_none());
        assert!(registry.category_with_name("Debug").is_none());
    }
}
