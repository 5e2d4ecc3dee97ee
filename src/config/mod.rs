pub mod auth_config;
pub mod database_config;
pub mod defaults;
pub mod security_config;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

pub use auth_config::{AuthConfig, ConfigError, OAuthConfig};
pub use database_config::DatabaseConfig;
pub use security_config::SecurityConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "defaults::default_host")]
    pub host: String,
    #[serde(default = "defaults::default_port")]
    pub port: u16,
    #[serde(default = "defaults::default_environment")]
    pub environment: String,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub oauth: OAuthConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_logging_level")]
    pub level: String,
    #[serde(default = "defaults::default_logging_json_format")]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_logging_level(),
            json_format: defaults::default_logging_json_format(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Run the idempotent skill/interest seed before the server starts.
    #[serde(default)]
    pub seed_on_startup: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Box<figment::Error>> {
        let environment =
            std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| defaults::default_environment());
        Self::figment(&environment).extract().map_err(Box::new)
    }

    /// Layering: `config/default.toml`, then `config/<environment>.toml`, then `APP_*`
    /// variables (`__` separates nested keys), then the conventional bare variables.
    pub fn figment(environment: &str) -> Figment {
        Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!("config/{environment}.toml")))
            .merge(Env::prefixed("APP_").split("__"))
            .merge(
                Env::raw()
                    .only(&["DATABASE_URL", "JWT_SECRET", "GOOGLE_CLIENT_ID"])
                    .map(|key| match key.as_str().to_ascii_uppercase().as_str() {
                        "DATABASE_URL" => "database.url".into(),
                        "JWT_SECRET" => "auth.jwt_secret".into(),
                        "GOOGLE_CLIENT_ID" => "oauth.google_client_id".into(),
                        _ => key.into(),
                    }),
            )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.validate()?;
        self.oauth.validate()
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}
