use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::controllers::genre::{
    add_song_genres, delete_song_genres, genre_by_name, list_genres,
};
use crate::db::Database;

pub fn genre_routes() -> Router<Database> {
    Router::new()
        .route("/genres", get(list_genres))
        .route("/genres/{name}", get(genre_by_name))
        .route("/songs_genres", post(add_song_genres))
        .route("/songs_genres/{id}", delete(delete_song_genres))
}
