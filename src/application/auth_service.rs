use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{
    GoogleLoginRequest, LoginRequest, RefreshRequest, RegisterRequest, RegisterResponse,
    TokenPairResponse,
};
use crate::config::AuthConfig;
use crate::domain::{AuthIdentity, AuthProvider, User, UserSession};
use crate::error::{AppError, AppResult};
use crate::infrastructure::oauth::{DisabledIdentityProvider, ExternalIdentityProvider};
use crate::infrastructure::repositories::{AuthRepository, UserRepository};
use crate::utils::hash::{hash_password, hash_refresh_token, verify_password};
use crate::utils::jwt::{create_access_token, validate_token, Claims};

#[derive(Clone)]
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    auth_repo: Arc<dyn AuthRepository>,
    config: AuthConfig,
    identity_provider: Arc<dyn ExternalIdentityProvider>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        auth_repo: Arc<dyn AuthRepository>,
        config: AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            auth_repo,
            config,
            identity_provider: Arc::new(DisabledIdentityProvider),
        }
    }

    pub fn with_identity_provider(
        mut self,
        identity_provider: Arc<dyn ExternalIdentityProvider>,
    ) -> Self {
        self.identity_provider = identity_provider;
        self
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        request.validate()?;

        let email = normalize_email(&request.email);
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("email already registered".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email,
            name: request.name.trim().to_string(),
            phone: Some(request.phone),
            profile_picture: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let identity = AuthIdentity {
            id: Uuid::new_v4(),
            user_id: user.id,
            provider: AuthProvider::Email,
            provider_id: None,
            password_hash: Some(hash_password(&request.password)?),
            verified: false,
            created_at: now,
        };

        let user = self.user_repo.create_with_identity(&user, &identity).await?;
        info!(user_id = %user.id, "user registered");

        Ok(RegisterResponse {
            id: user.id,
            message: "User registered successfully".to_string(),
        })
    }

    pub async fn login(&self, request: LoginRequest, ip: Option<String>) -> AppResult<TokenPairResponse> {
        request.validate()?;

        let user = self
            .user_repo
            .find_by_email(&normalize_email(&request.email))
            .await?
            .filter(|user| user.is_active)
            .ok_or(AppError::InvalidCredentials)?;

        let hash = self
            .auth_repo
            .find_identity_by_user_id(user.id, AuthProvider::Email)
            .await?
            .and_then(|identity| identity.password_hash)
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(&request.password, &hash)? {
            warn!(user_id = %user.id, "login rejected: password mismatch");
            return Err(AppError::InvalidCredentials);
        }

        let (tokens, _) = self.issue_tokens(user.id, Uuid::new_v4(), ip).await?;
        info!(user_id = %user.id, "user logged in");
        Ok(tokens)
    }

    pub async fn google_login(
        &self,
        request: GoogleLoginRequest,
        ip: Option<String>,
    ) -> AppResult<TokenPairResponse> {
        request.validate()?;

        let profile = self.identity_provider.verify_token(&request.token).await?;
        let user = self.user_repo.find_or_create_external(&profile).await?;

        let (tokens, _) = self.issue_tokens(user.id, Uuid::new_v4(), ip).await?;
        info!(user_id = %user.id, provider = profile.provider.as_str(), "external login");
        Ok(tokens)
    }

    /// Rotates a refresh token. Presenting an already-revoked token revokes its whole family.
    pub async fn refresh(
        &self,
        request: RefreshRequest,
        ip: Option<String>,
    ) -> AppResult<TokenPairResponse> {
        request.validate()?;

        let session = self
            .auth_repo
            .find_session_by_token_hash(&hash_refresh_token(&request.refresh))
            .await?
            .ok_or(AppError::InvalidToken)?;

        if session.is_revoked() {
            return Err(self.reject_replay(session.family_id).await?);
        }

        if session.is_expired_at(Utc::now()) {
            self.auth_repo
                .revoke_session(session.id, "refresh token expired")
                .await?;
            return Err(AppError::TokenExpired);
        }

        self.auth_repo.touch_session(session.id).await?;

        // Only the request that revokes the session may rotate it.
        if !self.auth_repo.revoke_session(session.id, "rotated").await? {
            return Err(self.reject_replay(session.family_id).await?);
        }

        let user = self
            .user_repo
            .find_by_id(session.user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or(AppError::Unauthorized)?;

        let (tokens, replacement_id) = self.issue_tokens(user.id, session.family_id, ip).await?;
        self.auth_repo
            .set_replaced_by(session.id, replacement_id)
            .await?;

        Ok(tokens)
    }

    pub async fn logout(&self, request: RefreshRequest) -> AppResult<()> {
        request.validate()?;

        let session = self
            .auth_repo
            .find_session_by_token_hash(&hash_refresh_token(&request.refresh))
            .await?
            .filter(|session| !session.is_revoked())
            .ok_or(AppError::InvalidToken)?;

        if !self.auth_repo.revoke_session(session.id, "logout").await? {
            return Err(AppError::InvalidToken);
        }
        info!(user_id = %session.user_id, "user logged out");
        Ok(())
    }

    pub fn validate_access_token(&self, token: &str) -> AppResult<Claims> {
        validate_token(token, &self.config)
    }

    /// Resolves an access token to the id of an active user.
    pub async fn authenticate(&self, token: &str) -> AppResult<Uuid> {
        let claims = self.validate_access_token(token)?;
        self.user_repo
            .find_by_id(claims.sub)
            .await?
            .filter(|user| user.is_active)
            .map(|user| user.id)
            .ok_or(AppError::Unauthorized)
    }

    async fn reject_replay(&self, family_id: Uuid) -> AppResult<AppError> {
        warn!(family_id = %family_id, "refresh token replay detected");
        self.auth_repo
            .revoke_family(family_id, "refresh token replay detected")
            .await?;
        Ok(AppError::InvalidToken)
    }

    fn refresh_expiry(&self) -> Duration {
        Duration::days(self.config.refresh_token_expiration_days as i64)
    }

    async fn issue_tokens(
        &self,
        user_id: Uuid,
        family_id: Uuid,
        ip: Option<String>,
    ) -> AppResult<(TokenPairResponse, Uuid)> {
        let raw_refresh_token = format!("{}.{}", Uuid::new_v4(), Uuid::new_v4());
        let now = Utc::now();
        let session = UserSession {
            id: Uuid::new_v4(),
            user_id,
            family_id,
            refresh_token_hash: hash_refresh_token(&raw_refresh_token),
            expires_at: now + self.refresh_expiry(),
            revoked_at: None,
            replaced_by: None,
            revoked_reason: None,
            created_ip: ip,
            last_seen_at: Some(now),
            created_at: now,
        };
        let session = self.auth_repo.create_session(&session).await?;

        let access = create_access_token(user_id, &self.config)?;
        Ok((
            TokenPairResponse {
                access,
                refresh: raw_refresh_token,
            },
            session.id,
        ))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
