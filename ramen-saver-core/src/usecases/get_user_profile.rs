//! User profile lookup use case

use std::sync::Arc;

use crate::domain::{Result, UserProfile};
use crate::ports::UserProfileRepository;

/// Get the user profile for display
///
/// Unlike the store's get-or-create read, this returns `None` when no
/// profile exists yet, so the caller can branch into onboarding instead of
/// silently creating one.
pub struct GetUserProfileUseCase {
    user_profile: Arc<dyn UserProfileRepository>,
}

impl GetUserProfileUseCase {
    pub fn new(user_profile: Arc<dyn UserProfileRepository>) -> Self {
        Self { user_profile }
    }

    pub async fn execute(&self) -> Result<Option<UserProfile>> {
        self.user_profile.find().await
    }
}
