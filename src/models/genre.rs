use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: i32,
    pub genre: String,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct SongGenre {
    pub song_id: i32,
    pub genre_id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddSongGenresRequest {
    pub songid: i32,
    pub genreid: Vec<i32>,
}
