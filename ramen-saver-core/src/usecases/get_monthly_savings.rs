//! Monthly savings use case

use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::domain::Result;
use crate::ports::SavingsRecordRepository;

/// Year/month selector; omitted fields default to the current UTC date
#[derive(Debug, Clone, Copy, Default)]
pub struct GetMonthlySavingsInput {
    pub year: Option<i32>,
    /// 1-based month (1 = January)
    pub month: Option<u32>,
}

/// Get the amount saved within one calendar month
pub struct GetMonthlySavingsUseCase {
    savings_records: Arc<dyn SavingsRecordRepository>,
}

impl GetMonthlySavingsUseCase {
    pub fn new(savings_records: Arc<dyn SavingsRecordRepository>) -> Self {
        Self { savings_records }
    }

    /// Monthly total in yen; defaults to the current month when no input is
    /// given
    pub async fn execute(&self, input: Option<GetMonthlySavingsInput>) -> Result<f64> {
        let input = input.unwrap_or_default();
        let now = Utc::now();
        let year = input.year.unwrap_or_else(|| now.year());
        let month = input.month.unwrap_or_else(|| now.month());

        self.savings_records.get_monthly_savings(year, month).await
    }
}
