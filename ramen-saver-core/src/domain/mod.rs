//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod error;
mod savings_record;
mod timestamp;
mod user_profile;

pub use error::{Error, Result};
pub use savings_record::{validate_amount, SavingsRecord, SavingsRecordFilters};
pub use timestamp::{month_bounds, Timestamp};
pub use user_profile::{UserProfile, DEFAULT_RAMEN_PRICE};
