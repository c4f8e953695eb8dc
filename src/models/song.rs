use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One flat row of the song×genre join: a song repeated once per matching
/// genre, or once with a null genre when no join row exists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SongGenreRow {
    pub id: i32,
    pub title: String,
    pub artist: Option<String>,
    pub youtube_url: Option<String>,
    pub spotify_url: Option<String>,
    pub userid: Option<i32>,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub genre: Option<String>,
}

/// A song after genre merging: one record per song id, genres collected
/// into a list in input order (nulls included, per the left join).
#[derive(Debug, Serialize, Deserialize)]
pub struct SongWithGenres {
    pub id: i32,
    pub title: String,
    pub artist: Option<String>,
    pub youtube_url: Option<String>,
    pub spotify_url: Option<String>,
    pub userid: Option<i32>,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub genre: Vec<Option<String>>,
}

/// Exactly one of youtube_url/spotify_url must be non-empty; the other
/// arrives as an empty string (the client sends both fields).
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSongRequest {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub youtube_url: String,
    #[serde(default)]
    pub spotify_url: String,
    pub userid: i32,
}
