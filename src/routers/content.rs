use axum::{
    routing::{delete, get},
    Router,
};

use crate::controllers::content::{
    create_resource, delete_content, list_resources, resource_item_stub,
};
use crate::db::Database;

pub fn content_routes() -> Router<Database> {
    Router::new()
        .route("/resources", get(list_resources).post(create_resource))
        .route(
            "/resources/{id}",
            get(resource_item_stub)
                .delete(resource_item_stub)
                .patch(resource_item_stub),
        )
        .route("/content/{id}", delete(delete_content))
}
