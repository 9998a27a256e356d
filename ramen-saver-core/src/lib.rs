//! Ramen Saver Core - savings ledger for the ramen-resistance habit tracker
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (SavingsRecord, UserProfile)
//! - **ports**: Trait definitions for external dependencies (KeyValueStore, repositories)
//! - **usecases**: Application operations
//! - **adapters**: Concrete implementations (file-backed and in-memory storage)
//!
//! Presentation layers call only the seven use cases; the stores are an
//! implementation detail behind them.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod usecases;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::{
    FileKeyValueStore, InMemoryKeyValueStore, KvSavingsRecordRepository, KvUserProfileRepository,
};
use config::Config;
use ports::{KeyValueStore, SavingsRecordRepository, UserProfileRepository};
use usecases::*;

// Re-export commonly used types at crate root
pub use domain::{
    Error, Result as LedgerResult, SavingsRecord, SavingsRecordFilters, Timestamp, UserProfile,
    DEFAULT_RAMEN_PRICE,
};

/// Main context for ramen-saver operations
///
/// This is the primary entry point for callers. It wires the key-value
/// store into the repositories and the repositories into the use cases.
pub struct RamenSaverContext {
    pub config: Config,
    pub savings_records: Arc<dyn SavingsRecordRepository>,
    pub user_profile: Arc<dyn UserProfileRepository>,
    pub get_total_savings: GetTotalSavingsUseCase,
    pub get_monthly_savings: GetMonthlySavingsUseCase,
    pub get_savings_history: GetSavingsHistoryUseCase,
    pub get_user_profile: GetUserProfileUseCase,
    pub initialize_user_profile: InitializeUserProfileUseCase,
    pub update_ramen_price: UpdateRamenPriceUseCase,
    pub save_ramen_resistance: SaveRamenResistanceUseCase,
}

impl RamenSaverContext {
    /// Create a context persisting under `data_dir`
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(data_dir));
        Ok(Self::wire(config, store))
    }

    /// Create a context with no persistence, for tests and ephemeral use
    pub fn in_memory() -> Self {
        Self::wire(Config::default(), Arc::new(InMemoryKeyValueStore::new()))
    }

    fn wire(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        let savings_records: Arc<dyn SavingsRecordRepository> =
            Arc::new(KvSavingsRecordRepository::new(Arc::clone(&store)));
        let user_profile: Arc<dyn UserProfileRepository> = Arc::new(
            KvUserProfileRepository::new(store, config.default_ramen_price),
        );

        Self {
            config,
            get_total_savings: GetTotalSavingsUseCase::new(Arc::clone(&savings_records)),
            get_monthly_savings: GetMonthlySavingsUseCase::new(Arc::clone(&savings_records)),
            get_savings_history: GetSavingsHistoryUseCase::new(Arc::clone(&savings_records)),
            get_user_profile: GetUserProfileUseCase::new(Arc::clone(&user_profile)),
            initialize_user_profile: InitializeUserProfileUseCase::new(Arc::clone(&user_profile)),
            update_ramen_price: UpdateRamenPriceUseCase::new(Arc::clone(&user_profile)),
            save_ramen_resistance: SaveRamenResistanceUseCase::new(
                Arc::clone(&savings_records),
                Arc::clone(&user_profile),
            ),
            savings_records,
            user_profile,
        }
    }
}
