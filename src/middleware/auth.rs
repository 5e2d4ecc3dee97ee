use std::future::Future;
use std::pin::Pin;

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use uuid::Uuid;

use crate::api::routes::AppState;
use crate::error::{AppError, AppResult};
use crate::utils::jwt::bearer_token;

/// Caller identity taken from a valid `Authorization: Bearer <jwt>` header.
/// Tokens of deactivated accounts are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = AppResult<Self>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|header| header.to_str().ok())
                .and_then(bearer_token)
                .ok_or(AppError::Unauthorized)?;

            let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
                AppError::InternalError(anyhow::anyhow!("missing AppState app data"))
            })?;

            let user_id = state.auth_service.authenticate(token).await?;
            Ok(AuthenticatedUser { user_id })
        })
    }
}
