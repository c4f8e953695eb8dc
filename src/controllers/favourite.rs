use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::db::Database;
use crate::error::ApiError;
use crate::merge::merge_song_genres;
use crate::models::favourite::{CreateFavouriteRequest, DeleteFavouriteRequest};

pub async fn create_favourite(
    State(database): State<Database>,
    Json(payload): Json<CreateFavouriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = database.create_favourite(payload.id, payload.userid).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Songs favourited by user {id}, with genres merged the same way as
/// GET /songs.
pub async fn list_favourites(
    State(database): State<Database>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = database.list_favourites_for_user(id).await?;
    let songs = merge_song_genres(rows);

    Ok(Json(json!({
        "status": "success",
        "data": songs,
    })))
}

/// {id} is the song; the requesting user rides in the body.
pub async fn delete_favourite(
    State(database): State<Database>,
    Path(id): Path<i32>,
    Json(payload): Json<DeleteFavouriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = database.delete_favourite(id, payload.active_user.id).await?;

    Ok(Json(json!({
        "status": "success",
        "data": deleted,
    })))
}
