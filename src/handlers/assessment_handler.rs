use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{RecordAnswerRequest, RecordProgressRequest},
    services::Requester,
};

#[post("/api/assessments")]
async fn start_assessment(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let started = state
        .assessment_service
        .start_assessment(auth.user_id)
        .await?;
    Ok(HttpResponse::Created().json(started))
}

#[get("/api/assessments")]
async fn list_assessments(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let assessments = state
        .assessment_service
        .list_for_user(auth.user_id)
        .await?;
    Ok(HttpResponse::Ok().json(assessments))
}

#[get("/api/assessments/{id}")]
async fn get_assessment(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let view = state
        .assessment_service
        .get_assessment_view(id.into_inner(), &Requester::from(&auth))
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/assessments/{id}/answers")]
async fn record_answer(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    request: web::Json<RecordAnswerRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let answer = state
        .assessment_service
        .record_answer(
            id.into_inner(),
            &Requester::from(&auth),
            request.question_id,
            request.option_id,
        )
        .await?;
    Ok(HttpResponse::Ok().json(answer))
}

#[post("/api/assessments/{id}/progress")]
async fn record_progress(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    request: web::Json<RecordProgressRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let assessment = state
        .assessment_service
        .record_progress(
            id.into_inner(),
            &Requester::from(&auth),
            request.current_question_index,
        )
        .await?;
    Ok(HttpResponse::Ok().json(assessment))
}

#[post("/api/assessments/{id}/complete")]
async fn complete_assessment(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let outcome = state
        .assessment_service
        .finish_assessment(id.into_inner(), &Requester::from(&auth))
        .await?;
    Ok(HttpResponse::Ok().json(outcome))
}
