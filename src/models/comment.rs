use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i32,
    pub user_id: i32,
    pub comment: String,
    pub song_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Comment joined with the commenting user's name for GET /comments.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct CommentWithUser {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub comment: String,
    pub song_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub userid: i32,
    #[serde(rename = "commentText")]
    pub comment_text: String,
    pub song_id: i32,
}
