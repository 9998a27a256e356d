//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

mod key_value_store;
mod repository;

pub use key_value_store::KeyValueStore;
pub use repository::{SavingsRecordRepository, UserProfileRepository};
