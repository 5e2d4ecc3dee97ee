use crate::config::SecurityConfig;
use actix_cors::Cors;
use actix_web::http::header;

pub fn cors_middleware(config: &SecurityConfig) -> Cors {
    let allowlist = config.cors_allowed_origins.clone();

    Cors::default()
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .expose_headers(vec!["x-request-id"])
        .max_age(3600)
        .allowed_origin_fn(move |origin, _| {
            origin
                .to_str()
                .ok()
                .map(|value| allowlist.iter().any(|allowed| allowed == value))
                .unwrap_or(false)
        })
}
