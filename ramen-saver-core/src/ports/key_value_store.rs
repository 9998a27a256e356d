//! Key-value store port - persistent string storage abstraction

use crate::domain::Result;

/// Synchronous string key-value storage
///
/// The contract mirrors browser-style local storage: get, set, and remove by
/// string key, with values persisting for the lifetime of the installation.
/// Implementations are not coordinated across concurrent writers;
/// last-writer-wins is accepted.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`; no-op when absent
    fn remove(&self, key: &str) -> Result<()>;
}
