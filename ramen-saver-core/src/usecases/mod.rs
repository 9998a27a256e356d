//! Use-case layer - application operations
//!
//! Each use case is one narrow operation over the repository ports,
//! constructor-injected and stateless. Store failures propagate unchanged;
//! no retries, no caching, no translation.

mod get_monthly_savings;
mod get_savings_history;
mod get_total_savings;
mod get_user_profile;
mod initialize_user_profile;
mod save_ramen_resistance;
mod update_ramen_price;

pub use get_monthly_savings::{GetMonthlySavingsInput, GetMonthlySavingsUseCase};
pub use get_savings_history::GetSavingsHistoryUseCase;
pub use get_total_savings::GetTotalSavingsUseCase;
pub use get_user_profile::GetUserProfileUseCase;
pub use initialize_user_profile::{InitializeUserProfileInput, InitializeUserProfileUseCase};
pub use save_ramen_resistance::SaveRamenResistanceUseCase;
pub use update_ramen_price::{UpdateRamenPriceInput, UpdateRamenPriceUseCase};
