use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, auth::AuthenticatedUser, errors::AppError,
    models::dto::request::CreateQuestionRequest,
};

/// Active question catalog, available without authentication so the client
/// can render a preview before sign-in.
#[get("/api/questions")]
async fn list_questions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let questions = state.catalog_service.list_questions().await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[post("/api/questions")]
async fn create_question(
    state: web::Data<AppState>,
    request: web::Json<CreateQuestionRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;
    let request = request.into_inner();
    request.validate()?;

    let question = state.catalog_service.create_question(request.into()).await?;
    Ok(HttpResponse::Created().json(question))
}

#[put("/api/questions/{id}")]
async fn update_question(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    request: web::Json<CreateQuestionRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;
    let request = request.into_inner();
    request.validate()?;

    let question = state
        .catalog_service
        .update_question(id.into_inner(), request.into())
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[delete("/api/questions/{id}")]
async fn delete_question(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;
    state.catalog_service.delete_question(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
