use actix_web::{web, HttpResponse};

use crate::api::dtos::UpdateProfileRequest;
use crate::api::routes::AppState;
use crate::error::AppResult;
use crate::middleware::AuthenticatedUser;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profile")
            .route("", web::get().to(get_profile))
            .route("/update", web::put().to(update_profile)),
    );
}

async fn get_profile(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let profile = state.profile_service.get_profile(caller.user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

async fn update_profile(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let profile = state
        .profile_service
        .update_profile(caller.user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}
