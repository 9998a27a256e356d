//! Repository ports - persistence abstraction for the savings ledger
//!
//! These traits define every storage operation the use-case layer may
//! perform. Implementations (adapters) provide the actual persistence logic.
//! All entry points are async for interface uniformity with a possible
//! networked backend; the local implementations complete without suspension.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Result, SavingsRecord, SavingsRecordFilters, UserProfile};

/// Durable, queryable collection of savings records
#[async_trait]
pub trait SavingsRecordRepository: Send + Sync {
    /// Get records, filtered and windowed, newest first
    async fn find_all(&self, filters: Option<SavingsRecordFilters>) -> Result<Vec<SavingsRecord>>;

    /// Get a record by id; `None` when absent or logically deleted
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SavingsRecord>>;

    /// Create and persist a new record with the given amount
    async fn create(&self, amount: f64) -> Result<SavingsRecord>;

    /// Logically delete a record; no-op when the id is unknown
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Sum of amounts over all non-deleted records
    async fn get_total_savings(&self) -> Result<f64>;

    /// Sum of amounts over non-deleted records within the given
    /// calendar month (1-based)
    async fn get_monthly_savings(&self, year: i32, month: u32) -> Result<f64>;

    /// Count of non-deleted records
    async fn get_total_count(&self) -> Result<usize>;
}

/// Singleton user profile storage
#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// True iff a profile is currently persisted
    async fn exists(&self) -> Result<bool>;

    /// Get the profile, initializing one with the default price if absent
    async fn get(&self) -> Result<UserProfile>;

    /// Get the profile without auto-initializing; `None` when absent
    async fn find(&self) -> Result<Option<UserProfile>>;

    /// Create a brand-new profile, replacing any existing one
    ///
    /// `None` means "use the configured default price".
    async fn initialize(&self, ramen_price: Option<f64>) -> Result<UserProfile>;

    /// Replace the price on the current (or freshly initialized) profile
    async fn update(&self, ramen_price: f64) -> Result<UserProfile>;
}
