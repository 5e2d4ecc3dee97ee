use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde::Deserialize;
use tracing::warn;

use super::ExternalIdentityProvider;
use crate::config::OAuthConfig;
use crate::domain::{AuthProvider, ExternalProfile};
use crate::error::{AppError, AppResult};

/// Checks Google ID tokens against the tokeninfo endpoint.
pub struct GoogleIdentityProvider {
    config: OAuthConfig,
    client: Client,
}

impl GoogleIdentityProvider {
    pub fn new(config: OAuthConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("building http client: {e}")))?;
        Ok(Self { config, client })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    fn is_set(&self) -> bool {
        match self {
            Flag::Bool(value) => *value,
            Flag::Text(value) => value.eq_ignore_ascii_case("true"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    sub: String,
    aud: String,
    email: Option<String>,
    email_verified: Option<Flag>,
    name: Option<String>,
    picture: Option<String>,
}

fn profile_from_token_info(info: TokenInfo, client_id: &str) -> AppResult<ExternalProfile> {
    if info.aud != client_id {
        return Err(AppError::ExternalAuthFailed(
            "Google token was issued for a different client".to_string(),
        ));
    }
    let Some(email) = info.email.filter(|email| !email.trim().is_empty()) else {
        return Err(AppError::ExternalAuthFailed(
            "Google account did not provide an email".to_string(),
        ));
    };
    if !info.email_verified.as_ref().is_some_and(Flag::is_set) {
        return Err(AppError::ExternalAuthFailed(
            "Google account email is not verified".to_string(),
        ));
    }

    Ok(ExternalProfile {
        provider: AuthProvider::Google,
        provider_id: info.sub,
        email: email.trim().to_lowercase(),
        email_verified: true,
        name: info.name,
        picture: info.picture,
    })
}

#[async_trait]
impl ExternalIdentityProvider for GoogleIdentityProvider {
    async fn verify_token(&self, token: &str) -> AppResult<ExternalProfile> {
        if !self.config.google_enabled() {
            return Err(AppError::ExternalAuthFailed(
                "Google login is not configured".to_string(),
            ));
        }

        let response = self
            .client
            .get(&self.config.google_tokeninfo_url)
            .header(ACCEPT, "application/json")
            .query(&[("id_token", token)])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, timeout = e.is_timeout(), "google token verification request failed");
                if e.is_timeout() {
                    AppError::ExternalAuthFailed("Google token verification timed out".to_string())
                } else {
                    AppError::ExternalAuthFailed("Google token verification failed".to_string())
                }
            })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "google rejected id token");
            return Err(AppError::ExternalAuthFailed("Invalid Google token".to_string()));
        }

        let info = response.json::<TokenInfo>().await.map_err(|e| {
            warn!(error = %e, "google tokeninfo response was malformed");
            AppError::ExternalAuthFailed("Invalid Google token".to_string())
        })?;

        profile_from_token_info(info, &self.config.google_client_id)
    }
}
