use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::db::Database;
use crate::error::ApiError;

pub async fn list_users(State(database): State<Database>) -> Result<impl IntoResponse, ApiError> {
    let users = database.list_users().await?;

    Ok(Json(json!({
        "status": "success",
        "data": users,
    })))
}
