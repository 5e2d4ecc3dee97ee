use std::sync::Arc;
use std::time::Instant;

use actix_web::dev::Service as _;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{web, App, HttpServer};
use skills_backend::api::routes::{self, AppState};
use skills_backend::application::{
    seed_catalog, AuthService, CatalogService, ProfileService, SearchService,
    WorkExperienceService,
};
use skills_backend::config::{AppConfig, LoggingConfig};
use skills_backend::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use skills_backend::infrastructure::oauth::GoogleIdentityProvider;
use skills_backend::infrastructure::repositories::{
    AssociationRepositoryImpl, AuthRepositoryImpl, CatalogRepositoryImpl, UserRepositoryImpl,
    WorkExperienceRepositoryImpl,
};
use skills_backend::middleware::request_logging::status_class;
use skills_backend::security::{cors_middleware, security_headers};
use tracing::{error, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);
    if config.json_format {
        registry
            .with(fmt::layer().json().with_current_span(true).with_span_list(true))
            .init();
    } else {
        registry.with(fmt::layer().pretty()).init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().expect("failed to load application configuration");
    init_tracing(&config.logging);
    config.validate().expect("invalid application configuration");

    let pool = create_pool(&config.database)
        .await
        .expect("failed to create database pool");

    run_migrations(&pool)
        .await
        .expect("database migrations failed");

    let user_repo = Arc::new(UserRepositoryImpl::new(pool.clone()));
    let auth_repo = Arc::new(AuthRepositoryImpl::new(pool.clone()));
    let catalog_repo = Arc::new(CatalogRepositoryImpl::new(pool.clone()));
    let association_repo = Arc::new(AssociationRepositoryImpl::new(pool.clone()));
    let work_repo = Arc::new(WorkExperienceRepositoryImpl::new(pool.clone()));

    if config.catalog.seed_on_startup {
        let summary = seed_catalog(catalog_repo.as_ref())
            .await
            .expect("catalog seeding failed");
        info!(created = summary.created, existing = summary.existing, "catalog seeded");
    }

    if !config.oauth.google_enabled() {
        warn!("GOOGLE_CLIENT_ID is not set; google login will be rejected");
    }
    let identity_provider = Arc::new(
        GoogleIdentityProvider::new(config.oauth.clone())
            .expect("failed to build google identity provider"),
    );

    let state = AppState {
        auth_service: Arc::new(
            AuthService::new(user_repo.clone(), auth_repo, config.auth.clone())
                .with_identity_provider(identity_provider),
        ),
        profile_service: Arc::new(ProfileService::new(user_repo.clone())),
        catalog_service: Arc::new(CatalogService::new(catalog_repo, association_repo.clone())),
        work_experience_service: Arc::new(WorkExperienceService::new(work_repo)),
        search_service: Arc::new(SearchService::new(user_repo, association_repo)),
        db_pool: Some(pool.clone()),
    };

    let bind_host = config.host.clone();
    let bind_port = config.port;
    let security_config = config.security.clone();

    info!(host = %bind_host, port = bind_port, environment = %config.environment, "starting server");

    HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| {
                let request_id = Uuid::new_v4().to_string();
                let path = req.path().to_string();
                let method = req.method().to_string();
                let start = Instant::now();

                let fut = srv.call(req);
                async move {
                    let mut response = fut.await?;
                    response.headers_mut().insert(
                        HeaderName::from_static("x-request-id"),
                        HeaderValue::from_str(&request_id)
                            .unwrap_or_else(|_| HeaderValue::from_static("invalid-request-id")),
                    );

                    let status = response.status().as_u16();
                    let latency_ms = start.elapsed().as_millis() as u64;
                    if status >= 500 {
                        error!(
                            request_id = %request_id,
                            method = %method,
                            path = %path,
                            status = status,
                            latency_ms = latency_ms,
                            "request failed"
                        );
                    } else {
                        info!(
                            request_id = %request_id,
                            method = %method,
                            path = %path,
                            status = status,
                            status_class = status_class(status),
                            latency_ms = latency_ms,
                            "request completed"
                        );
                    }
                    Ok(response)
                }
            })
            .wrap(cors_middleware(&security_config))
            .wrap(security_headers())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind((bind_host, bind_port))?
    .run()
    .await
}
