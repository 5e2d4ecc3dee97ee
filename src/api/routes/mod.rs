use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use sqlx::PgPool;
use tracing::warn;

use crate::application::{
    AuthService, CatalogService, ProfileService, SearchService, WorkExperienceService,
};
use crate::error::{AppError, AppResult};

pub mod auth;
pub mod catalog;
pub mod profile;
pub mod users;
pub mod work;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub profile_service: Arc<ProfileService>,
    pub catalog_service: Arc<CatalogService>,
    pub work_experience_service: Arc<WorkExperienceService>,
    pub search_service: Arc<SearchService>,
    pub db_pool: Option<PgPool>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .service(
            web::scope("/api/v1")
                .configure(auth::configure)
                .configure(profile::configure)
                .configure(catalog::configure)
                .configure(users::configure)
                .configure(work::configure),
        )
        .route("/health", web::get().to(health))
        .route("/ready", web::get().to(ready));
}

/// Malformed bodies, paths and query strings surface as regular validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::validation_error(format!("Invalid request body: {err}")).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::validation_error(format!("Invalid path: {err}")).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::validation_error(format!("Invalid query string: {err}")).into()
    })
}

async fn health() -> &'static str {
    "ok"
}

async fn ready(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let not_ready = || AppError::ServiceUnavailable {
        service: "database".to_string(),
        message: "Service not ready".to_string(),
    };

    let pool = state.db_pool.as_ref().ok_or_else(not_ready)?;
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "readiness probe failed");
            not_ready()
        })?;
    Ok(HttpResponse::Ok().body("ready"))
}
