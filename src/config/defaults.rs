pub const PLACEHOLDER_JWT_SECRET: &str = "change-me-in-production";

pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_port() -> u16 {
    8080
}

pub fn default_environment() -> String {
    "development".to_string()
}

pub fn default_db_acquire_timeout_seconds() -> u64 {
    10
}

pub fn default_db_idle_timeout_seconds() -> u64 {
    600
}

pub fn default_db_max_lifetime_seconds() -> u64 {
    1800
}

pub fn default_jwt_kid() -> String {
    "v1".to_string()
}

pub fn default_google_tokeninfo_url() -> String {
    "https://oauth2.googleapis.com/tokeninfo".to_string()
}

pub fn default_oauth_request_timeout_seconds() -> u64 {
    5
}

pub fn default_cors_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

pub fn default_logging_level() -> String {
    "info".to_string()
}

pub fn default_logging_json_format() -> bool {
    true
}
