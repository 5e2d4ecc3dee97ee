use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller may change on their own profile. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.profile_picture.is_none()
    }

    pub fn apply_to(self, user: &User, now: DateTime<Utc>) -> User {
        User {
            name: self.name.unwrap_or_else(|| user.name.clone()),
            phone: self.phone.or_else(|| user.phone.clone()),
            profile_picture: self
                .profile_picture
                .or_else(|| user.profile_picture.clone()),
            updated_at: now,
            ..user.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "auth_provider", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Email,
    Google,
}

impl AuthProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthProvider::Email => "email",
            AuthProvider::Google => "google",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub provider: AuthProvider,
    pub provider_id: Option<String>,
    pub password_hash: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Profile data returned by an external identity provider after token verification.
#[derive(Debug, Clone)]
pub struct ExternalProfile {
    pub provider: AuthProvider,
    pub provider_id: String,
    pub email: String,
    pub email_verified: bool,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub family_id: Uuid,
    pub refresh_token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
    pub replaced_by: Option<Uuid>,
    pub revoked_reason: Option<String>,
    pub created_ip: Option<String>,
    pub last_seen_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserSession {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
