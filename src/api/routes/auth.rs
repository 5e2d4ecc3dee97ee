use actix_web::{web, HttpRequest, HttpResponse};

use crate::api::dtos::{GoogleLoginRequest, LoginRequest, RefreshRequest, RegisterRequest};
use crate::api::routes::AppState;
use crate::error::AppResult;
use crate::middleware::request_logging::client_ip;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/google", web::post().to(google))
            .route("/refresh", web::post().to(refresh))
            .route("/logout", web::post().to(logout)),
    );
}

async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let result = state.auth_service.register(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(result))
}

async fn login(
    state: web::Data<AppState>,
    request: HttpRequest,
    payload: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let tokens = state
        .auth_service
        .login(payload.into_inner(), client_ip(&request))
        .await?;
    Ok(HttpResponse::Ok().json(tokens))
}

async fn google(
    state: web::Data<AppState>,
    request: HttpRequest,
    payload: web::Json<GoogleLoginRequest>,
) -> AppResult<HttpResponse> {
    let tokens = state
        .auth_service
        .google_login(payload.into_inner(), client_ip(&request))
        .await?;
    Ok(HttpResponse::Ok().json(tokens))
}

async fn refresh(
    state: web::Data<AppState>,
    request: HttpRequest,
    payload: web::Json<RefreshRequest>,
) -> AppResult<HttpResponse> {
    let tokens = state
        .auth_service
        .refresh(payload.into_inner(), client_ip(&request))
        .await?;
    Ok(HttpResponse::Ok().json(tokens))
}

async fn logout(
    state: web::Data<AppState>,
    payload: web::Json<RefreshRequest>,
) -> AppResult<HttpResponse> {
    state.auth_service.logout(payload.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
