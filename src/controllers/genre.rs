use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::db::Database;
use crate::error::ApiError;
use crate::models::genre::AddSongGenresRequest;

pub async fn list_genres(State(database): State<Database>) -> Result<impl IntoResponse, ApiError> {
    let genres = database.list_genres().await?;

    Ok(Json(json!({
        "status": "success",
        "result": genres,
    })))
}

pub async fn genre_by_name(
    State(database): State<Database>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    match database.find_genre_id_by_name(&name).await? {
        Some(id) => Ok(Json(id)),
        None => Err(ApiError::NotFound(format!("no genre named {}", name))),
    }
}

/// Inserts one join row per genre id, in list order. The loop is not
/// transactional: an error aborts it and rows already inserted remain.
/// All inserted rows go back in a single response.
pub async fn add_song_genres(
    State(database): State<Database>,
    Json(payload): Json<AddSongGenresRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut inserted = Vec::with_capacity(payload.genreid.len());
    for genre_id in &payload.genreid {
        inserted.push(database.add_song_genre(payload.songid, *genre_id).await?);
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": inserted,
        })),
    ))
}

pub async fn delete_song_genres(
    State(database): State<Database>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = database.delete_song_genres(id).await?;

    Ok(Json(json!({
        "status": "success",
        "data": deleted,
    })))
}
