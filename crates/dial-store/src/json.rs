//! JSON-file store backend.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use dial_core::{PersistentStore, StoreError, StoreResult, TweakValue};
use parking_lot::RwLock;

/// A store backed by a single JSON file: one object keyed by tweak
/// identifier.
///
/// The whole map is loaded at open (an absent file opens empty) and the
/// file is rewritten on every `set`/`remove`, under the write lock so file
/// writes are serialized. Flush/durability timing stays with the OS.
///
/// JSON has no representation for NaN or infinite floats (serde_json would
/// write `null` and the file would no longer parse). `set` rejects such
/// values with a serialization error before touching any state, so one bad
/// value can never corrupt the file for every other key.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: RwLock<HashMap<String, TweakValue>>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading any existing contents.
    ///
    /// Fails when the file exists but cannot be read or parsed; a missing
    /// file is simply an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|err| StoreError::serialization(err.to_string()))?,
            Err(err) if err.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// The file this store persists to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn ensure_representable(value: &TweakValue) -> StoreResult<()> {
        if let TweakValue::Float(float) = value {
            if !float.is_finite() {
                return Err(StoreError::serialization(format!(
                    "non-finite float {float} has no JSON representation"
                )));
            }
        }
        Ok(())
    }

    fn flush(&self, values: &HashMap<String, TweakValue>) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(values)
            .map_err(|err| StoreError::serialization(err.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PersistentStore for JsonFileStore {
    fn get(&self, identifier: &str) -> Option<TweakValue> {
        self.values.read().get(identifier).cloned()
    }

    fn set(&self, identifier: &str, value: &TweakValue) -> StoreResult<()> {
        Self::ensure_representable(value)?;
        let mut values = self.values.write();
        values.insert(identifier.to_string(), value.clone());
        self.flush(&values)
    }

    fn remove(&self, identifier: &str) -> StoreResult<()> {
        let mut values = self.values.write();
        if values.remove(identifier).is_none() {
            return Ok(());
        }
        self.flush(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use dial_core::Color;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("tweaks.json")
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(store_path(&dir)).unwrap();
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_every_kind_round_trips_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let values = [
            ("bool", TweakValue::Bool(true)),
            ("int", TweakValue::Int(-7)),
            ("float", TweakValue::Float(0.1)),
            ("string", TweakValue::from("héllo")),
            ("color", TweakValue::Color(Color::rgba(1, 2, 3, 4))),
            (
                "date",
                TweakValue::Date(Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap()),
            ),
            ("bytes", TweakValue::Bytes(vec![0, 128, 255])),
        ];

        {
            let store = JsonFileStore::open(&path).unwrap();
            for (key, value) in &values {
                store.set(key, value).unwrap();
            }
        }

        // A fresh store on the same path sees exactly what was written.
        let reopened = JsonFileStore::open(&path).unwrap();
        for (key, value) in &values {
            assert_eq!(reopened.get(key).as_ref(), Some(value), "kind {key}");
        }
    }

    #[test]
    fn test_non_finite_float_is_rejected_without_corrupting_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let store = JsonFileStore::open(&path).unwrap();
        store.set("finite", &TweakValue::Float(1.5)).unwrap();

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                store.set("bad", &TweakValue::Float(bad)),
                Err(StoreError::Serialization(_))
            ));
        }

        // The rejected value left no trace, in memory or on disk.
        assert_eq!(store.get("bad"), None);
        store.set("finite", &TweakValue::Float(2.5)).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("finite"), Some(TweakValue::Float(2.5)));
        assert_eq!(reopened.get("bad"), None);
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let store = JsonFileStore::open(&path).unwrap();
        store.set("a", &TweakValue::Int(1)).unwrap();
        store.remove("a").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a"), None);
    }

    #[test]
    fn test_corrupt_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        fs::write(&path, b"not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path),
            Err(StoreError::Serialization(_))
        ));
    }
}
