use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Auth configuration is invalid: {0}")]
    Auth(String),

    #[error("OAuth configuration is invalid: {0}")]
    OAuth(String),
}

#[derive(Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    #[serde(default = "crate::config::defaults::default_jwt_kid")]
    pub jwt_kid: String,
    #[serde(default)]
    pub previous_jwt_secrets: Vec<String>,
    #[serde(default)]
    pub previous_jwt_kids: Vec<String>,
    pub jwt_expiration_seconds: u64,
    pub refresh_token_expiration_days: u64,
    pub issuer: String,
    pub audience: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_kid", &self.jwt_kid)
            .field("previous_jwt_secrets", &"[REDACTED]")
            .field("previous_jwt_kids", &self.previous_jwt_kids)
            .field("jwt_expiration_seconds", &self.jwt_expiration_seconds)
            .field(
                "refresh_token_expiration_days",
                &self.refresh_token_expiration_days,
            )
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let jwt_secret = self.jwt_secret.trim();
        if jwt_secret.is_empty() {
            return Err(ConfigError::Auth(
                "JWT_SECRET must be set via environment variable".to_string(),
            ));
        }

        if jwt_secret == crate::config::defaults::PLACEHOLDER_JWT_SECRET {
            return Err(ConfigError::Auth(
                "JWT_SECRET must be set to a secure value, not the default placeholder".to_string(),
            ));
        }

        if self.previous_jwt_kids.len() != self.previous_jwt_secrets.len() {
            return Err(ConfigError::Auth(
                "previous_jwt_kids and previous_jwt_secrets must have the same length".to_string(),
            ));
        }

        Ok(())
    }
}

/// Google sign-in settings. An empty client id disables external login.
#[derive(Debug, Deserialize, Clone)]
pub struct OAuthConfig {
    #[serde(default)]
    pub google_client_id: String,
    #[serde(default = "crate::config::defaults::default_google_tokeninfo_url")]
    pub google_tokeninfo_url: String,
    #[serde(default = "crate::config::defaults::default_oauth_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            google_client_id: String::new(),
            google_tokeninfo_url: crate::config::defaults::default_google_tokeninfo_url(),
            request_timeout_seconds:
                crate::config::defaults::default_oauth_request_timeout_seconds(),
        }
    }
}

impl OAuthConfig {
    pub fn google_enabled(&self) -> bool {
        !self.google_client_id.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_seconds == 0 {
            return Err(ConfigError::OAuth(
                "request_timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
