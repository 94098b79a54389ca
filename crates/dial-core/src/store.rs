//! The persistent store boundary.
//!
//! Persistence is an injected dependency: a [`PersistentTweak`] holds a
//! non-owning reference to some [`PersistentStore`] keyed by its own
//! identifier, and the store outlives any single tweak instance. The core
//! defines only the interface; real backends live in `dial-store`, and
//! tests substitute an in-memory fake.
//!
//! [`PersistentTweak`]: crate::tweak::PersistentTweak

use thiserror::Error;

use crate::value::TweakValue;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors a store backend can report.
///
/// Write failures never reach the caller of a tweak mutation: the tweak
/// layer logs them and keeps its in-memory value authoritative.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn io<S: Into<String>>(msg: S) -> Self {
        Self::Io(msg.into())
    }

    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn backend<S: Into<String>>(msg: S) -> Self {
        Self::Backend(msg.into())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// A key-value store keyed by tweak identifier.
///
/// Implementations must round-trip every [`TweakValue`] kind without loss.
/// Durability (flush timing and the like) is the backend's concern, not the
/// registry's.
pub trait PersistentStore: Send + Sync {
    /// Read the value stored under `identifier`, if any.
    fn get(&self, identifier: &str) -> Option<TweakValue>;

    /// Write `value` under `identifier`, replacing any previous value.
    fn set(&self, identifier: &str, value: &TweakValue) -> StoreResult<()>;

    /// Delete the value stored under `identifier`. Deleting an absent key
    /// is not an error.
    fn remove(&self, identifier: &str) -> StoreResult<()>;
}
