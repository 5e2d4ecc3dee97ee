use async_trait::async_trait;
use skills_backend::domain::{AuthProvider, ExternalProfile};
use skills_backend::error::{AppError, AppResult};
use skills_backend::infrastructure::oauth::ExternalIdentityProvider;
use std::collections::HashMap;
use std::sync::Mutex;

/// Accepts only tokens registered through `accept`.
#[derive(Default)]
pub struct MockIdentityProvider {
    pub profiles: Mutex<HashMap<String, ExternalProfile>>,
}

impl MockIdentityProvider {
    pub fn accept(&self, token: &str, email: &str, subject: &str) -> ExternalProfile {
        let profile = ExternalProfile {
            provider: AuthProvider::Google,
            provider_id: subject.to_string(),
            email: email.to_string(),
            email_verified: true,
            name: Some("Google User".to_string()),
            picture: Some("https://lh3.googleusercontent.com/avatar.png".to_string()),
        };
        self.profiles
            .lock()
            .expect("profiles mutex poisoned")
            .insert(token.to_string(), profile.clone());
        profile
    }
}

#[async_trait]
impl ExternalIdentityProvider for MockIdentityProvider {
    async fn verify_token(&self, token: &str) -> AppResult<ExternalProfile> {
        self.profiles
            .lock()
            .expect("profiles mutex poisoned")
            .get(token)
            .cloned()
            .ok_or_else(|| AppError::ExternalAuthFailed("Invalid Google token".to_string()))
    }
}
