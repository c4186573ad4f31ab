use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, handlers::parse_id, models::dto::CreateKeyRequest,
};

#[get("/api/keys")]
async fn list_keys(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let keys = state.key_service.list_keys().await?;
    Ok(HttpResponse::Ok().json(keys))
}

#[post("/api/keys")]
async fn create_key(
    state: web::Data<AppState>,
    request: web::Json<CreateKeyRequest>,
) -> Result<HttpResponse, AppError> {
    let created = state.key_service.create_key(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[delete("/api/keys/{id}")]
async fn delete_key(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id)?;
    state.key_service.delete_key(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
