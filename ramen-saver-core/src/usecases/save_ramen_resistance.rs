//! Resistance recording use case

use std::sync::Arc;

use crate::domain::{Result, SavingsRecord};
use crate::ports::{SavingsRecordRepository, UserProfileRepository};

/// Record one resisted ramen purchase
///
/// The only cross-store rule in the system lives here: the new record's
/// amount is the profile's ramen price as configured at save time. A later
/// price change never touches records already written.
pub struct SaveRamenResistanceUseCase {
    savings_records: Arc<dyn SavingsRecordRepository>,
    user_profile: Arc<dyn UserProfileRepository>,
}

impl SaveRamenResistanceUseCase {
    pub fn new(
        savings_records: Arc<dyn SavingsRecordRepository>,
        user_profile: Arc<dyn UserProfileRepository>,
    ) -> Self {
        Self {
            savings_records,
            user_profile,
        }
    }

    pub async fn execute(&self) -> Result<SavingsRecord> {
        // get() auto-initializes the profile with the default price, so
        // resisting before onboarding still records a sensible amount
        let profile = self.user_profile.get().await?;
        self.savings_records.create(profile.ramen_price).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        InMemoryKeyValueStore, KvSavingsRecordRepository, KvUserProfileRepository,
    };
    use crate::domain::{Error, DEFAULT_RAMEN_PRICE};
    use crate::ports::KeyValueStore;

    struct Fixture {
        savings: Arc<dyn SavingsRecordRepository>,
        profile: Arc<dyn UserProfileRepository>,
        use_case: SaveRamenResistanceUseCase,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let savings: Arc<dyn SavingsRecordRepository> =
            Arc::new(KvSavingsRecordRepository::new(store.clone()));
        let profile: Arc<dyn UserProfileRepository> = Arc::new(KvUserProfileRepository::new(
            store,
            DEFAULT_RAMEN_PRICE,
        ));
        let use_case = SaveRamenResistanceUseCase::new(savings.clone(), profile.clone());
        Fixture {
            savings,
            profile,
            use_case,
        }
    }

    /// Store whose writes always fail
    struct FullDiskStore;

    impl KeyValueStore for FullDiskStore {
        fn get(&self, _key: &str) -> crate::domain::Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> crate::domain::Result<()> {
            Err(Error::persistence("storage quota exceeded"))
        }

        fn remove(&self, _key: &str) -> crate::domain::Result<()> {
            Err(Error::persistence("storage quota exceeded"))
        }
    }

    #[tokio::test]
    async fn test_storage_failure_propagates_unchanged() {
        let store = Arc::new(FullDiskStore);
        let savings: Arc<dyn SavingsRecordRepository> =
            Arc::new(KvSavingsRecordRepository::new(store.clone()));
        let profile: Arc<dyn UserProfileRepository> =
            Arc::new(KvUserProfileRepository::new(store, DEFAULT_RAMEN_PRICE));
        let use_case = SaveRamenResistanceUseCase::new(savings, profile);

        // The profile auto-initialization write fails first; the use case
        // adds no recovery or translation of its own
        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));
        assert_eq!(err.to_string(), "persistence failure: storage quota exceeded");
    }

    #[tokio::test]
    async fn test_record_amount_equals_configured_price() {
        let f = fixture();
        f.profile.initialize(Some(850.0)).await.unwrap();

        let record = f.use_case.execute().await.unwrap();
        assert_eq!(record.amount, 850.0);
        assert!(!record.is_deleted);
    }

    #[tokio::test]
    async fn test_uses_default_price_when_no_profile_exists() {
        let f = fixture();
        let record = f.use_case.execute().await.unwrap();
        assert_eq!(record.amount, DEFAULT_RAMEN_PRICE);
        // The profile was created as a side effect
        assert!(f.profile.exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_price_change_only_affects_later_records() {
        let f = fixture();
        f.profile.initialize(Some(800.0)).await.unwrap();

        let before = f.use_case.execute().await.unwrap();
        f.profile.update(1000.0).await.unwrap();
        let after = f.use_case.execute().await.unwrap();

        assert_eq!(before.amount, 800.0);
        assert_eq!(after.amount, 1000.0);

        // The earlier record is untouched in storage
        let stored = f.savings.find_by_id(before.id).await.unwrap().unwrap();
        assert_eq!(stored.amount, 800.0);
    }
}
