//! User profile initialization use case

use std::sync::Arc;

use crate::domain::{Result, UserProfile};
use crate::ports::UserProfileRepository;

/// Onboarding parameters; an omitted price falls back to the configured
/// default
#[derive(Debug, Clone, Copy, Default)]
pub struct InitializeUserProfileInput {
    pub ramen_price: Option<f64>,
}

/// Create the user profile during onboarding
///
/// Replaces any existing profile outright (new id, new creation time).
/// Intended to run once per installation.
pub struct InitializeUserProfileUseCase {
    user_profile: Arc<dyn UserProfileRepository>,
}

impl InitializeUserProfileUseCase {
    pub fn new(user_profile: Arc<dyn UserProfileRepository>) -> Self {
        Self { user_profile }
    }

    pub async fn execute(&self, input: Option<InitializeUserProfileInput>) -> Result<UserProfile> {
        let input = input.unwrap_or_default();
        self.user_profile.initialize(input.ramen_price).await
    }
}
