use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{CreateBranchRequest, CreateCareerRequest, CreateProgrammeRequest},
};

#[get("/api/health")]
async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.db.health_check().await?;
    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}

#[get("/api/careers")]
async fn list_careers(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let careers = state.catalog_service.list_careers().await?;
    Ok(HttpResponse::Ok().json(careers))
}

#[post("/api/careers")]
async fn create_career(
    state: web::Data<AppState>,
    request: web::Json<CreateCareerRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;
    let request = request.into_inner();
    request.validate()?;

    let career = state.catalog_service.create_career(request.into()).await?;
    Ok(HttpResponse::Created().json(career))
}

#[put("/api/careers/{id}")]
async fn update_career(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    request: web::Json<CreateCareerRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;
    let request = request.into_inner();
    request.validate()?;

    let career = state
        .catalog_service
        .update_career(id.into_inner(), request.into())
        .await?;
    Ok(HttpResponse::Ok().json(career))
}

#[delete("/api/careers/{id}")]
async fn delete_career(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;
    state.catalog_service.delete_career(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/api/programmes")]
async fn list_programmes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let programmes = state.catalog_service.list_programmes().await?;
    Ok(HttpResponse::Ok().json(programmes))
}

#[get("/api/engineering-branches")]
async fn list_branches(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let branches = state.catalog_service.list_branches().await?;
    Ok(HttpResponse::Ok().json(branches))
}

#[post("/api/engineering-branches")]
async fn create_branch(
    state: web::Data<AppState>,
    request: web::Json<CreateBranchRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;
    let request = request.into_inner();
    request.validate()?;

    let branch = state.catalog_service.create_branch(request.into()).await?;
    Ok(HttpResponse::Created().json(branch))
}

#[post("/api/programmes")]
async fn create_programme(
    state: web::Data<AppState>,
    request: web::Json<CreateProgrammeRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;
    let request = request.into_inner();
    request.validate()?;

    let programme = state
        .catalog_service
        .create_programme(request.into())
        .await?;
    Ok(HttpResponse::Created().json(programme))
}

/// Loads the built-in reference data. Only exposed outside production; in
/// production the route pretends not to exist.
#[post("/api/seed")]
async fn seed_reference_data(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    if state.config.is_production() {
        return Err(AppError::NotFound("Resource not found".to_string()));
    }

    let summary = state.catalog_service.seed_reference_data().await?;
    Ok(HttpResponse::Ok().json(summary))
}
