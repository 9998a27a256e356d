//! Savings record domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::timestamp::Timestamp;
use crate::domain::{Error, Result};

/// One logged instance of forgoing a ramen purchase
///
/// Records are logically deleted: `is_deleted` can move from `false` to
/// `true` exactly once, and the record stays in storage forever. `amount`
/// and `recorded_at` are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsRecord {
    pub id: Uuid,
    /// Amount saved, in yen, copied from the profile price at save time
    pub amount: f64,
    pub recorded_at: Timestamp,
    pub is_deleted: bool,
}

impl SavingsRecord {
    /// Create a new record stamped with the current time
    ///
    /// The amount must be finite and non-negative.
    pub fn new(amount: f64) -> Result<Self> {
        validate_amount(amount)?;
        Ok(Self {
            id: Uuid::new_v4(),
            amount,
            recorded_at: Timestamp::now(),
            is_deleted: false,
        })
    }
}

/// Reject negative or non-finite amounts
pub fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(Error::invalid_input(format!("amount must be finite, got {amount}")));
    }
    if amount < 0.0 {
        return Err(Error::invalid_input(format!(
            "amount must be non-negative, got {amount}"
        )));
    }
    Ok(())
}

/// Filter and pagination window for history queries
///
/// Date bounds are inclusive on `recorded_at`. `offset` skips the first N
/// entries of the newest-first result and `limit` caps how many follow;
/// both reject negative values.
#[derive(Debug, Clone, Default)]
pub struct SavingsRecordFilters {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl SavingsRecordFilters {
    /// Reject negative pagination values
    pub fn validate(&self) -> Result<()> {
        if let Some(offset) = self.offset {
            if offset < 0 {
                return Err(Error::invalid_input(format!(
                    "offset must be non-negative, got {offset}"
                )));
            }
        }
        if let Some(limit) = self.limit {
            if limit < 0 {
                return Err(Error::invalid_input(format!(
                    "limit must be non-negative, got {limit}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let before = Utc::now();
        let record = SavingsRecord::new(800.0).unwrap();
        let after = Utc::now();

        assert_eq!(record.amount, 800.0);
        assert!(!record.is_deleted);
        let recorded = record.recorded_at.as_datetime().unwrap();
        assert!(recorded >= before && recorded <= after);
    }

    #[test]
    fn test_new_record_accepts_zero() {
        assert!(SavingsRecord::new(0.0).is_ok());
    }

    #[test]
    fn test_new_record_rejects_negative_and_non_finite() {
        assert!(matches!(SavingsRecord::new(-1.0), Err(Error::InvalidInput(_))));
        assert!(matches!(SavingsRecord::new(f64::NAN), Err(Error::InvalidInput(_))));
        assert!(matches!(
            SavingsRecord::new(f64::INFINITY),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_serialized_field_names_match_storage_layout() {
        let record = SavingsRecord::new(120.0).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("recordedAt").is_some());
        assert!(json.get("isDeleted").is_some());
        assert_eq!(json.get("amount").unwrap().as_f64(), Some(120.0));
    }

    #[test]
    fn test_filters_reject_negative_pagination() {
        let filters = SavingsRecordFilters {
            offset: Some(-1),
            ..Default::default()
        };
        assert!(matches!(filters.validate(), Err(Error::InvalidInput(_))));

        let filters = SavingsRecordFilters {
            limit: Some(-1),
            ..Default::default()
        };
        assert!(matches!(filters.validate(), Err(Error::InvalidInput(_))));

        assert!(SavingsRecordFilters::default().validate().is_ok());
    }
}
