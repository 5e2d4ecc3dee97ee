use actix_web::HttpRequest;

/// IP of the socket peer. `Forwarded` and `X-Forwarded-For` are client-controlled and ignored.
pub fn client_ip(req: &HttpRequest) -> Option<String> {
    req.peer_addr().map(|addr| addr.ip().to_string())
}

/// HTTP status class used to group access-log lines.
pub fn status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "unknown",
    }
}
