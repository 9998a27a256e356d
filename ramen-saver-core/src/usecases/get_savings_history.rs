//! Savings history use case

use std::sync::Arc;

use crate::domain::{Result, SavingsRecord, SavingsRecordFilters};
use crate::ports::SavingsRecordRepository;

/// Get the savings history, newest first, optionally filtered and paginated
pub struct GetSavingsHistoryUseCase {
    savings_records: Arc<dyn SavingsRecordRepository>,
}

impl GetSavingsHistoryUseCase {
    pub fn new(savings_records: Arc<dyn SavingsRecordRepository>) -> Self {
        Self { savings_records }
    }

    pub async fn execute(
        &self,
        filters: Option<SavingsRecordFilters>,
    ) -> Result<Vec<SavingsRecord>> {
        self.savings_records.find_all(filters).await
    }
}
