use axum::{routing::get, Router};

use crate::controllers::song::{create_song, list_songs};
use crate::db::Database;

pub fn song_routes() -> Router<Database> {
    Router::new().route("/songs", get(list_songs).post(create_song))
}
