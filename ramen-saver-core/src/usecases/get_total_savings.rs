//! Total savings use case

use std::sync::Arc;

use crate::domain::Result;
use crate::ports::SavingsRecordRepository;

/// Get the all-time total saved across non-deleted records
pub struct GetTotalSavingsUseCase {
    savings_records: Arc<dyn SavingsRecordRepository>,
}

impl GetTotalSavingsUseCase {
    pub fn new(savings_records: Arc<dyn SavingsRecordRepository>) -> Self {
        Self { savings_records }
    }

    /// Total amount in yen; 0 when nothing has been recorded
    pub async fn execute(&self) -> Result<f64> {
        self.savings_records.get_total_savings().await
    }
}
