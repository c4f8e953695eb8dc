use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::db::Database;
use crate::error::ApiError;
use crate::models::comment::CreateCommentRequest;

pub async fn create_comment(
    State(database): State<Database>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = database.create_comment(&payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_comments(
    State(database): State<Database>,
) -> Result<impl IntoResponse, ApiError> {
    let comments = database.list_comments().await?;

    Ok(Json(json!({
        "status": "success",
        "data": comments,
    })))
}
