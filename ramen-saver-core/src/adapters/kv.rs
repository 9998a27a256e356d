//! Key-value-backed repository adapters
//!
//! Persistence layout (two independent keys):
//! - `ramen-saver:savings-records` - JSON array of records
//! - `ramen-saver:user-profile` - JSON object
//!
//! Malformed stored data never surfaces as an error. A payload that fails to
//! decode reads as an empty collection or absent profile, logged as a
//! data-integrity warning; a record timestamp that fails to parse becomes the
//! invalid sentinel and is excluded by every date filter.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    month_bounds, validate_amount, Error, Result, SavingsRecord, SavingsRecordFilters,
    Timestamp, UserProfile,
};
use crate::ports::{KeyValueStore, SavingsRecordRepository, UserProfileRepository};

/// Storage key for the savings record collection
pub const SAVINGS_RECORDS_KEY: &str = "ramen-saver:savings-records";

/// Storage key for the user profile
pub const USER_PROFILE_KEY: &str = "ramen-saver:user-profile";

/// Savings record repository over a key-value store
pub struct KvSavingsRecordRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvSavingsRecordRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the full collection, deleted records included
    fn load_records(&self) -> Result<Vec<SavingsRecord>> {
        let Some(raw) = self.store.get(SAVINGS_RECORDS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!("savings records payload is malformed ({e}); treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn save_records(&self, records: &[SavingsRecord]) -> Result<()> {
        let raw = serde_json::to_string(records)
            .map_err(|e| Error::persistence(format!("failed to encode savings records: {e}")))?;
        self.store.set(SAVINGS_RECORDS_KEY, &raw)
    }
}

#[async_trait]
impl SavingsRecordRepository for KvSavingsRecordRepository {
    async fn find_all(&self, filters: Option<SavingsRecordFilters>) -> Result<Vec<SavingsRecord>> {
        let filters = filters.unwrap_or_default();
        filters.validate()?;

        let mut records: Vec<SavingsRecord> = self
            .load_records()?
            .into_iter()
            .filter(|r| !r.is_deleted)
            .collect();

        if filters.start_date.is_some() || filters.end_date.is_some() {
            records.retain(|r| r.recorded_at.within(filters.start_date, filters.end_date));
        }

        // Newest first; invalid timestamps sort last
        records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

        let offset = filters.offset.unwrap_or(0) as usize;
        let records = records.into_iter().skip(offset);
        Ok(match filters.limit {
            Some(limit) => records.take(limit as usize).collect(),
            None => records.collect(),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SavingsRecord>> {
        let records = self.load_records()?;
        Ok(records.into_iter().find(|r| r.id == id && !r.is_deleted))
    }

    async fn create(&self, amount: f64) -> Result<SavingsRecord> {
        let record = SavingsRecord::new(amount)?;

        let mut records = self.load_records()?;
        records.push(record.clone());
        self.save_records(&records)?;

        debug!("created savings record {} for {} yen", record.id, record.amount);
        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut records = self.load_records()?;
        if let Some(record) = records.iter_mut().find(|r| r.id == id) {
            record.is_deleted = true;
            self.save_records(&records)?;
            debug!("logically deleted savings record {id}");
        }
        Ok(())
    }

    async fn get_total_savings(&self) -> Result<f64> {
        let records = self.find_all(None).await?;
        Ok(records.iter().map(|r| r.amount).sum())
    }

    async fn get_monthly_savings(&self, year: i32, month: u32) -> Result<f64> {
        let (start, end) = month_bounds(year, month).ok_or_else(|| {
            Error::invalid_input(format!("{year}-{month} does not name a calendar month"))
        })?;

        let filters = SavingsRecordFilters {
            start_date: Some(start),
            end_date: Some(end),
            ..Default::default()
        };
        let records = self.find_all(Some(filters)).await?;
        Ok(records.iter().map(|r| r.amount).sum())
    }

    async fn get_total_count(&self) -> Result<usize> {
        Ok(self.find_all(None).await?.len())
    }
}

/// User profile repository over a key-value store
///
/// The default price used by `get`-initiated auto-initialization is injected
/// at construction (see `Config`).
pub struct KvUserProfileRepository {
    store: Arc<dyn KeyValueStore>,
    default_price: f64,
}

impl KvUserProfileRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, default_price: f64) -> Self {
        Self {
            store,
            default_price,
        }
    }

    fn read_profile(&self) -> Result<Option<UserProfile>> {
        let Some(raw) = self.store.get(USER_PROFILE_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!("user profile payload is malformed ({e}); treating as absent");
                Ok(None)
            }
        }
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let raw = serde_json::to_string(profile)
            .map_err(|e| Error::persistence(format!("failed to encode user profile: {e}")))?;
        self.store.set(USER_PROFILE_KEY, &raw)
    }
}

#[async_trait]
impl UserProfileRepository for KvUserProfileRepository {
    async fn exists(&self) -> Result<bool> {
        Ok(self.read_profile()?.is_some())
    }

    async fn get(&self) -> Result<UserProfile> {
        match self.read_profile()? {
            Some(profile) => Ok(profile),
            None => self.initialize(None).await,
        }
    }

    async fn find(&self) -> Result<Option<UserProfile>> {
        self.read_profile()
    }

    async fn initialize(&self, ramen_price: Option<f64>) -> Result<UserProfile> {
        let price = ramen_price.unwrap_or(self.default_price);
        // Onboarding validates upstream; only non-finite input is rejected here
        if !price.is_finite() {
            return Err(Error::invalid_input(format!(
                "ramen price must be finite, got {price}"
            )));
        }

        let profile = UserProfile::new(price);
        self.save_profile(&profile)?;
        debug!("initialized user profile {} at {} yen", profile.id, price);
        Ok(profile)
    }

    async fn update(&self, ramen_price: f64) -> Result<UserProfile> {
        validate_amount(ramen_price)
            .map_err(|_| Error::invalid_input(format!(
                "ramen price must be a non-negative finite number, got {ramen_price}"
            )))?;

        let mut profile = self.get().await?;
        profile.ramen_price = ramen_price;
        profile.updated_at = Timestamp::now();
        self.save_profile(&profile)?;
        Ok(profile)
    }
}
