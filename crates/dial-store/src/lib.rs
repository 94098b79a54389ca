//! Persistent store backends for the dial tweak registry.
//!
//! Both backends implement [`dial_core::PersistentStore`] and round-trip
//! every [`TweakValue`](dial_core::TweakValue) kind without loss:
//!
//! - [`MemoryStore`]: process-local map. The in-memory fake for tests, also
//!   useful when a host wants registry semantics without durability.
//! - [`JsonFileStore`]: a single JSON file rewritten on every write.
//!
//! The write-through contract lives in `dial-core`: a persistent tweak
//! issues the store write synchronously and swallows failures, so backends
//! report errors honestly and leave retry policy to the host.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
