use axum::{routing::get, Router};

use crate::controllers::comment::{create_comment, list_comments};
use crate::db::Database;

pub fn comment_routes() -> Router<Database> {
    Router::new().route("/comments", get(list_comments).post(create_comment))
}
