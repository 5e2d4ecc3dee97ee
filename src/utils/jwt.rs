use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: usize,
    pub iat: usize,
    pub jti: Uuid,
    pub kid: String,
    pub iss: String,
    pub aud: Vec<String>,
}

pub fn create_access_token(user_id: Uuid, config: &AuthConfig) -> AppResult<String> {
    let now = Utc::now();
    let exp = now + Duration::seconds(config.jwt_expiration_seconds as i64);

    let claims = Claims {
        sub: user_id,
        exp: exp.timestamp() as usize,
        iat: now.timestamp() as usize,
        jti: Uuid::new_v4(),
        kid: config.jwt_kid.clone(),
        iss: config.issuer.clone(),
        aud: vec![config.audience.clone()],
    };

    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(config.jwt_kid.clone());

    encode(
        &header,
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(e.into()))
}

pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub fn validate_token(token: &str, config: &AuthConfig) -> AppResult<Claims> {
    let header = decode_header(token).map_err(|_| AppError::InvalidToken)?;
    let kid = header.kid.ok_or(AppError::InvalidToken)?;

    let secret = signing_secret_for_kid(config, &kid).ok_or(AppError::InvalidToken)?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(AppError::from)
}

fn signing_secret_for_kid(config: &AuthConfig, kid: &str) -> Option<String> {
    if kid == config.jwt_kid {
        return Some(config.jwt_secret.clone());
    }

    config
        .previous_jwt_kids
        .iter()
        .position(|existing| existing == kid)
        .and_then(|idx| config.previous_jwt_secrets.get(idx).cloned())
}
