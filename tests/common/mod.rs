#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use once_cell::sync::Lazy;
use skills_backend::api::routes::AppState;
use skills_backend::application::{
    AuthService, CatalogService, ProfileService, SearchService, WorkExperienceService,
};
use skills_backend::config::AuthConfig;
use skills_backend::infrastructure::db::migrations::run_migrations;
use skills_backend::utils::jwt::Claims;
use sqlx::postgres::{PgConnection, PgPool, PgPoolOptions};
use sqlx::Connection;
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

pub mod fixtures;
pub mod mocks;

use mocks::{
    MockAssociationRepo, MockAuthRepo, MockCatalogRepo, MockIdentityProvider, MockUserRepo,
    MockWorkRepo,
};

static TEST_DB_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub struct TestDb {
    pool: PgPool,
    _db_lock_conn: PgConnection,
    _lock: MutexGuard<'static, ()>,
}

impl TestDb {
    /// Returns `None` when no database URL is configured, except in CI where that is a failure.
    pub async fn new() -> Option<Self> {
        dotenvy::dotenv().ok();
        let url = env::var("TEST_DATABASE_URL")
            .ok()
            .or_else(|| env::var("DATABASE_URL").ok());

        let url = match url {
            Some(u) => u,
            None => {
                if env::var("CI").is_ok() {
                    panic!(
                        "DATABASE_URL or TEST_DATABASE_URL not set in CI. \
                        Integration tests require a database connection."
                    );
                }
                eprintln!("Skipping test: DATABASE_URL or TEST_DATABASE_URL not set");
                return None;
            }
        };

        let lock = Lazy::force(&TEST_DB_MUTEX).lock().await;

        // Serializes resets across test binaries sharing the database.
        let mut db_lock_conn = PgConnection::connect(&url).await.ok()?;
        sqlx::query("SELECT pg_advisory_lock($1)")
            .bind(42_i64)
            .execute(&mut db_lock_conn)
            .await
            .ok()?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .ok()?;

        run_migrations(&pool).await.ok()?;
        reset_database(&pool).await.ok()?;

        Some(Self {
            pool,
            _db_lock_conn: db_lock_conn,
            _lock: lock,
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

async fn reset_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        TRUNCATE TABLE
            work_experiences,
            user_interests,
            user_skills,
            interests,
            skills,
            user_sessions,
            auth_identities,
            users
        RESTART IDENTITY CASCADE
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "integration-secret".to_string(),
        jwt_kid: "v1".to_string(),
        previous_jwt_secrets: Vec::new(),
        previous_jwt_kids: Vec::new(),
        jwt_expiration_seconds: 900,
        refresh_token_expiration_days: 7,
        issuer: "skills-backend-test".to_string(),
        audience: "skills-backend-client".to_string(),
    }
}

/// Signs a token for `user_id` that expired two hours ago.
pub fn expired_access_token(user_id: Uuid) -> String {
    let config = test_auth_config();
    let issued = Utc::now() - chrono::Duration::hours(3);
    let claims = Claims {
        sub: user_id,
        exp: (issued + chrono::Duration::hours(1)).timestamp() as usize,
        iat: issued.timestamp() as usize,
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
    .expect("sign expired token")
}

/// In-memory repositories wired the same way `main` wires the Postgres ones.
pub struct MockBackend {
    pub users: Arc<MockUserRepo>,
    pub auth: Arc<MockAuthRepo>,
    pub catalog: Arc<MockCatalogRepo>,
    pub associations: Arc<MockAssociationRepo>,
    pub work: Arc<MockWorkRepo>,
    pub identity_provider: Arc<MockIdentityProvider>,
}

impl MockBackend {
    pub fn new() -> Self {
        let auth = Arc::new(MockAuthRepo::default());
        let catalog = Arc::new(MockCatalogRepo::default());
        let associations = Arc::new(MockAssociationRepo::new(catalog.clone()));
        let work = Arc::new(MockWorkRepo::default());
        let users = Arc::new(MockUserRepo::new(
            auth.clone(),
            associations.clone(),
            work.clone(),
        ));

        Self {
            users,
            auth,
            catalog,
            associations,
            work,
            identity_provider: Arc::new(MockIdentityProvider::default()),
        }
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.users.clone(), self.auth.clone(), test_auth_config())
            .with_identity_provider(self.identity_provider.clone())
    }

    pub fn profile_service(&self) -> ProfileService {
        ProfileService::new(self.users.clone())
    }

    pub fn catalog_service(&self) -> CatalogService {
        CatalogService::new(self.catalog.clone(), self.associations.clone())
    }

    pub fn work_experience_service(&self) -> WorkExperienceService {
        WorkExperienceService::new(self.work.clone())
    }

    pub fn search_service(&self) -> SearchService {
        SearchService::new(self.users.clone(), self.associations.clone())
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            auth_service: Arc::new(self.auth_service()),
            profile_service: Arc::new(self.profile_service()),
            catalog_service: Arc::new(self.catalog_service()),
            work_experience_service: Arc::new(self.work_experience_service()),
            search_service: Arc::new(self.search_service()),
            db_pool: None,
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}
