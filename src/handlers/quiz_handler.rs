use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::parse_id,
    models::dto::{FilterParams, QuestionPayload, RandomParams},
};

#[get("/api/quiz")]
async fn list_questions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let questions = state.quiz_service.list_questions().await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[get("/api/quiz/random")]
async fn random_question(
    state: web::Data<AppState>,
    query: web::Query<RandomParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let question = state
        .quiz_service
        .random_question(params.category.as_deref(), params.difficulty.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[get("/api/quiz/statistics")]
async fn statistics(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = state.quiz_service.statistics().await?;
    Ok(HttpResponse::Ok().json(stats))
}

#[get("/api/quiz/filter")]
async fn filter_questions(
    state: web::Data<AppState>,
    query: web::Query<FilterParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let questions = state
        .quiz_service
        .filter_questions(
            params.question_type,
            params.category.as_deref(),
            params.difficulty.as_deref(),
        )
        .await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[get("/api/quiz/category/{category}")]
async fn questions_by_category(
    state: web::Data<AppState>,
    category: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let questions = state.quiz_service.questions_by_category(&category).await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[get("/api/quiz/difficulty/{difficulty}")]
async fn questions_by_difficulty(
    state: web::Data<AppState>,
    difficulty: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .quiz_service
        .questions_by_difficulty(&difficulty)
        .await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[get("/api/quiz/{id}")]
async fn get_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id)?;
    let question = state.quiz_service.get_question(&id).await?;
    Ok(HttpResponse::Ok().json(question))
}

#[post("/api/quiz")]
async fn create_question(
    state: web::Data<AppState>,
    payload: web::Json<QuestionPayload>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .quiz_service
        .create_question(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(question))
}

#[put("/api/quiz/{id}")]
async fn update_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<QuestionPayload>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id)?;
    let question = state
        .quiz_service
        .update_question(&id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[delete("/api/quiz/{id}")]
async fn delete_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id)?;
    state.quiz_service.delete_question(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
