//! The remote update boundary.
//!
//! A [`TweakCategory`](crate::category::TweakCategory) is the unit of remote
//! synchronization. It depends on an [`UpdateSource`] capability supplied by
//! the host; no wire format is prescribed here. The fetch may run on any
//! worker, but the category applies the result on the caller's own context
//! when the future resolves, so observers never see a torn update.

use async_trait::async_trait;
use thiserror::Error;

use crate::collection::TweakCollection;

/// Result type for update operations.
pub type UpdateResult<T> = Result<T, UpdateError>;

/// Failure of a remote category update.
///
/// This is the only error the registry surfaces to a caller; everything
/// else is either an absent lookup or a rejected duplicate.
#[derive(Error, Debug, Clone)]
pub enum UpdateError {
    #[error("update source error: {0}")]
    Source(String),

    #[error("update source unavailable")]
    Unavailable,

    #[error("update source knows no category named {name:?}")]
    UnknownCategory { name: String },
}

impl UpdateError {
    pub fn source<S: Into<String>>(msg: S) -> Self {
        Self::Source(msg.into())
    }
}

/// A capability that resolves a category name to its latest collections.
///
/// On success the returned collections replace the category's current ones
/// wholesale. On failure the category's visible state is left untouched.
#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// Fetch the full, current collection set for `category`.
    async fn fetch_collections(&self, category: &str) -> UpdateResult<Vec<TweakCollection>>;
}
