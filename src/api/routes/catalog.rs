use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{AddUserInterestRequest, AddUserSkillRequest};
use crate::api::routes::AppState;
use crate::domain::CatalogKind;
use crate::error::AppResult;
use crate::middleware::AuthenticatedUser;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/skills", web::get().to(list_skills))
        .route("/interests", web::get().to(list_interests))
        .service(
            web::scope("/user-skills")
                .route("", web::get().to(list_user_skills))
                .route("/add", web::post().to(add_user_skill))
                .route("/{id}/delete", web::delete().to(delete_user_skill)),
        )
        .service(
            web::scope("/user-interests")
                .route("", web::get().to(list_user_interests))
                .route("/add", web::post().to(add_user_interest))
                .route("/{id}/delete", web::delete().to(delete_user_interest)),
        );
}

async fn list_skills(
    state: web::Data<AppState>,
    _caller: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let skills = state.catalog_service.list(CatalogKind::Skill).await?;
    Ok(HttpResponse::Ok().json(skills))
}

async fn list_interests(
    state: web::Data<AppState>,
    _caller: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let interests = state.catalog_service.list(CatalogKind::Interest).await?;
    Ok(HttpResponse::Ok().json(interests))
}

async fn add_user_skill(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    payload: web::Json<AddUserSkillRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .catalog_service
        .add_user_skill(caller.user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(result))
}

async fn list_user_skills(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let result = state.catalog_service.list_user_skills(caller.user_id).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn delete_user_skill(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .catalog_service
        .remove(CatalogKind::Skill, caller.user_id, path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn add_user_interest(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    payload: web::Json<AddUserInterestRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .catalog_service
        .add_user_interest(caller.user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(result))
}

async fn list_user_interests(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let result = state
        .catalog_service
        .list_user_interests(caller.user_id)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn delete_user_interest(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .catalog_service
        .remove(CatalogKind::Interest, caller.user_id, path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
