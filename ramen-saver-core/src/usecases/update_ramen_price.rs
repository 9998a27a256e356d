//! Ramen price update use case

use std::sync::Arc;

use crate::domain::{Result, UserProfile};
use crate::ports::UserProfileRepository;

/// New price for the profile
#[derive(Debug, Clone, Copy)]
pub struct UpdateRamenPriceInput {
    /// New price in yen; must be finite and non-negative
    pub ramen_price: f64,
}

/// Change the configured ramen price
///
/// Only future resistance records pick up the new price; past records keep
/// the amount they were created with.
pub struct UpdateRamenPriceUseCase {
    user_profile: Arc<dyn UserProfileRepository>,
}

impl UpdateRamenPriceUseCase {
    pub fn new(user_profile: Arc<dyn UserProfileRepository>) -> Self {
        Self { user_profile }
    }

    pub async fn execute(&self, input: UpdateRamenPriceInput) -> Result<UserProfile> {
        self.user_profile.update(input.ramen_price).await
    }
}
