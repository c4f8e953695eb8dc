use axum::{routing::get, Router};

use crate::controllers::user::list_users;
use crate::db::Database;

pub fn user_routes() -> Router<Database> {
    Router::new().route("/users", get(list_users))
}
