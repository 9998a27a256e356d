//! User profile domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::timestamp::Timestamp;

/// Default ramen price in yen, used when no price is configured
pub const DEFAULT_RAMEN_PRICE: f64 = 800.0;

/// The single user's configurable price preference
///
/// One profile exists per installation. `id` and `created_at` are fixed at
/// initialization; re-initializing replaces the whole profile, new id
/// included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    /// Price in yen substituted into new savings records
    pub ramen_price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserProfile {
    /// Create a fresh profile with the given price
    pub fn new(ramen_price: f64) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            ramen_price,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_stamps_both_timestamps() {
        let profile = UserProfile::new(900.0);
        assert_eq!(profile.ramen_price, 900.0);
        assert_eq!(profile.created_at, profile.updated_at);
        assert!(profile.created_at.is_valid());
    }

    #[test]
    fn test_fresh_profiles_get_distinct_ids() {
        let a = UserProfile::new(DEFAULT_RAMEN_PRICE);
        let b = UserProfile::new(DEFAULT_RAMEN_PRICE);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialized_field_names_match_storage_layout() {
        let profile = UserProfile::new(800.0);
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("ramenPrice").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
