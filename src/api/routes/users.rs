use actix_web::{web, HttpResponse};

use crate::api::dtos::SearchUsersQuery;
use crate::api::routes::AppState;
use crate::error::AppResult;
use crate::middleware::AuthenticatedUser;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/users").route("/search", web::get().to(search_users)));
}

async fn search_users(
    state: web::Data<AppState>,
    _caller: AuthenticatedUser,
    query: web::Query<SearchUsersQuery>,
) -> AppResult<HttpResponse> {
    let results = state.search_service.search(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(results))
}
