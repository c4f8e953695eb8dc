use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::db::Database;
use crate::error::ApiError;
use crate::models::content::CreateResourceRequest;

pub async fn list_resources(
    State(database): State<Database>,
) -> Result<impl IntoResponse, ApiError> {
    let content = database.list_content().await?;

    Ok(Json(json!({
        "status": "success",
        "data": content,
    })))
}

pub async fn create_resource(
    State(database): State<Database>,
    Json(payload): Json<CreateResourceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = database.create_resource(&payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Deleting a missing id is not an error: `data` is null and the second
/// identical DELETE behaves the same as the first.
pub async fn delete_content(
    State(database): State<Database>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = database.delete_content(id).await?;

    Ok(Json(json!({
        "status": "success",
        "data": deleted,
    })))
}

/// GET/DELETE/PATCH /resources/{id} are defined but unimplemented routes.
pub async fn resource_item_stub() -> impl IntoResponse {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({
            "status": "fail",
            "error": "not implemented",
        })),
    )
}
