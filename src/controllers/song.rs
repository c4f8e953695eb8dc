use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::db::Database;
use crate::error::ApiError;
use crate::merge::merge_song_genres;
use crate::models::song::CreateSongRequest;

pub async fn list_songs(State(database): State<Database>) -> Result<impl IntoResponse, ApiError> {
    let rows = database.list_songs_with_genres().await?;
    let songs = merge_song_genres(rows);

    Ok(Json(json!({
        "status": "success",
        "data": songs,
    })))
}

pub async fn create_song(
    State(database): State<Database>,
    Json(payload): Json<CreateSongRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (url_column, url) = select_url_column(&payload.youtube_url, &payload.spotify_url)?;

    let created = database
        .create_song(&payload.title, &payload.artist, url_column, url, payload.userid)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Maps which url field the request filled in to the column the INSERT
/// writes. Exactly one of the two must be non-empty.
fn select_url_column<'a>(
    youtube_url: &'a str,
    spotify_url: &'a str,
) -> Result<(&'static str, &'a str), ApiError> {
    match (youtube_url.is_empty(), spotify_url.is_empty()) {
        (false, true) => Ok(("youtube_url", youtube_url)),
        (true, false) => Ok(("spotify_url", spotify_url)),
        (true, true) => Err(ApiError::BadRequest(
            "one of youtube_url or spotify_url is required".to_string(),
        )),
        (false, false) => Err(ApiError::BadRequest(
            "only one of youtube_url or spotify_url may be supplied".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_only_selects_the_youtube_column() {
        let (column, url) = select_url_column("https://youtu.be/x", "").unwrap();
        assert_eq!(column, "youtube_url");
        assert_eq!(url, "https://youtu.be/x");
    }

    #[test]
    fn spotify_only_selects_the_spotify_column() {
        let (column, url) = select_url_column("", "https://open.spotify.com/track/x").unwrap();
        assert_eq!(column, "spotify_url");
        assert_eq!(url, "https://open.spotify.com/track/x");
    }

    #[test]
    fn both_urls_empty_is_a_bad_request() {
        assert!(matches!(
            select_url_column("", ""),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn both_urls_supplied_is_a_bad_request() {
        assert!(matches!(
            select_url_column("a", "b"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
