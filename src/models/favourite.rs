use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Favourite {
    pub song_id: i32,
    pub favourited_user: i32,
}

/// Body of POST /favourites: `id` is the song being favourited.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateFavouriteRequest {
    pub id: i32,
    pub userid: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteFavouriteRequest {
    #[serde(rename = "activeUser")]
    pub active_user: ActiveUser,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActiveUser {
    pub id: i32,
}
