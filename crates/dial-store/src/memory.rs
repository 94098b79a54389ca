//! In-memory store backend.

use std::collections::HashMap;

use dial_core::{PersistentStore, StoreResult, TweakValue};
use parking_lot::RwLock;

/// A process-local store. Contents are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, TweakValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self, identifier: &str) -> Option<TweakValue> {
        self.values.read().get(identifier).cloned()
    }

    fn set(&self, identifier: &str, value: &TweakValue) -> StoreResult<()> {
        self.values
            .write()
            .insert(identifier.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, identifier: &str) -> StoreResult<()> {
        self.values.write().remove(identifier);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("a"), None);

        store.set("a", &TweakValue::Int(1)).unwrap();
        assert_eq!(store.get("a"), Some(TweakValue::Int(1)));
        assert_eq!(store.len(), 1);

        store.remove("a").unwrap();
        assert_eq!(store.get("a"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("missing").is_ok());
    }

    #[test]
    fn test_set_replaces() {
        let store = MemoryStore::new();
        store.set("a", &TweakValue::Int(1)).unwrap();
        store.set("a", &TweakValue::from("two")).unwrap();
        assert_eq!(store.get("a"), Some(TweakValue::from("two")));
    }
}
