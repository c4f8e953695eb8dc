use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One row of the content table. Both the /resources and /songs route
/// families write to this table with different column subsets, so every
/// shape-specific column is nullable.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Content {
    pub id: i32,
    pub title: String,
    pub artist: Option<String>,
    pub summary: Option<String>,
    pub youtube_url: Option<String>,
    pub spotify_url: Option<String>,
    pub article_url: Option<String>,
    pub userid: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateResourceRequest {
    pub title: String,
    pub summary: String,
    pub youtube_url: Option<String>,
    pub article_url: String,
}
