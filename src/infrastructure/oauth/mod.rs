mod google;

use async_trait::async_trait;

use crate::domain::ExternalProfile;
use crate::error::{AppError, AppResult};

pub use google::GoogleIdentityProvider;

/// Verifies a token minted by a third-party identity provider.
#[async_trait]
pub trait ExternalIdentityProvider: Send + Sync {
    async fn verify_token(&self, token: &str) -> AppResult<ExternalProfile>;
}

pub struct DisabledIdentityProvider;

#[async_trait]
impl ExternalIdentityProvider for DisabledIdentityProvider {
    async fn verify_token(&self, _token: &str) -> AppResult<ExternalProfile> {
        Err(AppError::ExternalAuthFailed(
            "Google login is not configured".to_string(),
        ))
    }
}
