use axum::{routing::get, routing::post, Router};

use crate::controllers::favourite::{create_favourite, delete_favourite, list_favourites};
use crate::db::Database;

pub fn favourite_routes() -> Router<Database> {
    Router::new()
        .route("/favourites", post(create_favourite))
        .route("/favourites/{id}", get(list_favourites).delete(delete_favourite))
}
