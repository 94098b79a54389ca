//! Core data model for the dial tweak registry.
//!
//! A registry is a hierarchy of named [`TweakCategory`]s, each holding named
//! [`TweakCollection`]s, each holding identified tweaks: typed, observable,
//! optionally persisted, optionally editable values a host application reads
//! and mutates at runtime without rebuilding.
//!
//! # Architecture
//!
//! ```text
//! TweakRegistry
//!    └── TweakCategory        (name-unique, unit of remote sync)
//!           └── TweakCollection   (identifier-unique, insertion-ordered)
//!                  └── TweakEntry
//!                         ├── ValueTweak       (immutable)
//!                         ├── ActionTweak      (block of work, no value)
//!                         └── Arc<dyn EditableTweak>
//!                                ├── MutableTweak
//!                                └── PersistentTweak (write-through store)
//! ```
//!
//! Reads flow bottom-up (category → collection → tweak → value); structural
//! mutation and bulk operations (reset, update) fan out top-down. Parents
//! own children exclusively and children keep no back-references.
//!
//! # Concurrency model
//!
//! One logical owner context per registry tree. Value writes and observer
//! delivery are synchronous on the mutating context. The one cross-context
//! operation is [`TweakCategory::update`]: the fetch may run anywhere, but
//! the result is applied when the caller awaits it, so observers never see
//! a torn update.
//!
//! # External boundaries
//!
//! - [`store::PersistentStore`]: injected key-value persistence, keyed by
//!   tweak identifier. Backends live in `dial-store`.
//! - [`update::UpdateSource`]: host-supplied capability resolving a category
//!   name to its latest collections. No wire format is prescribed.
//! - [`observe`]: subscribe/unsubscribe surfaces for value and structural
//!   changes.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use dial_core::{
//!     EditableTweak, MutableTweak, PossibleValues, NumericRange,
//!     TweakCollection, TweakCategory, TweakValue,
//! };
//!
//! let timeout: Arc<dyn EditableTweak> =
//!     Arc::new(MutableTweak::new("net.timeout", "Timeout", 30).unwrap());
//! timeout.set_possible_values(PossibleValues::from(NumericRange::new(0, 120)));
//!
//! let mut network = TweakCollection::new("Network");
//! network.add_tweak(Arc::clone(&timeout)).unwrap();
//!
//! let mut category = TweakCategory::new("Debug");
//! category.add_collection(network).unwrap();
//!
//! timeout.set_current_value(Some(TweakValue::Int(45)));
//! category.reset();
//! assert_eq!(timeout.current_value(), Some(TweakValue::Int(30)));
//! ```

pub mod category;
pub mod collection;
pub mod constraint;
pub mod observe;
pub mod registry;
pub mod store;
pub mod tweak;
pub mod update;
pub mod value;

// Re-exports for convenient access
pub use category::{CategoryError, TweakCategory};
pub use collection::{CollectionError, TweakCollection};
pub use constraint::PossibleValues;
pub use observe::{
    CategoryChange, CollectionChange, Observer, ObserverRegistry, RegistryChange, SubscriptionId,
    ValueChange, ValueObserver,
};
pub use registry::{RegistryError, TweakRegistry};
pub use store::{PersistentStore, StoreError, StoreResult};
pub use tweak::{
    ActionTweak, EditableTweak, MutableTweak, PersistentTweak, Tweak, TweakEntry, TweakError,
    TweakResult, ValueTweak,
};
pub use update::{UpdateError, UpdateResult, UpdateSource};
pub use value::{Color, NumericRange, TweakValue};
