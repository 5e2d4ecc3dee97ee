use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{CreateWorkExperienceRequest, UpdateWorkExperienceRequest};
use crate::api::routes::AppState;
use crate::error::AppResult;
use crate::middleware::AuthenticatedUser;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/work/experiences")
            .route("", web::get().to(list_experiences))
            .route("/create", web::post().to(create_experience))
            .route("/{id}", web::get().to(get_experience))
            .route("/{id}/edit", web::put().to(update_experience))
            .route("/{id}/delete", web::delete().to(delete_experience)),
    );
}

async fn list_experiences(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let result = state.work_experience_service.list(caller.user_id).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn create_experience(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    payload: web::Json<CreateWorkExperienceRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .work_experience_service
        .create(caller.user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(result))
}

async fn get_experience(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let result = state
        .work_experience_service
        .get(caller.user_id, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn update_experience(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateWorkExperienceRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .work_experience_service
        .update(caller.user_id, path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn delete_experience(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .work_experience_service
        .delete(caller.user_id, path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
