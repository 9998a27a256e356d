//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - A JSON file (or an in-memory map) for the KeyValueStore port
//! - Key-value-backed repositories for the two repository ports

pub mod file_store;
pub mod kv;
pub mod memory_store;

pub use file_store::FileKeyValueStore;
pub use kv::{KvSavingsRecordRepository, KvUserProfileRepository};
pub use memory_store::InMemoryKeyValueStore;
