//! Key-value storage adapters
//!
//! The calendar service persists everything through the [`KeyValueStore`]
//! trait: a synchronous string store with get/set/remove by key plus key
//! enumeration. [`FileStore`] is the durable implementation (one file per
//! key); [`MemoryStore`] backs tests and ephemeral use.

pub mod file_store;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Synchronous string key-value store.
///
/// All structured values are serialized to strings before they reach an
/// implementation; stores never interpret what they hold.
pub trait KeyValueStore {
    /// Read a value, `None` if the key has never been written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key (no-op if absent)
    fn remove_item(&self, key: &str) -> Result<()>;

    /// Enumerate every key currently stored
    fn keys(&self) -> Result<Vec<String>>;
}
