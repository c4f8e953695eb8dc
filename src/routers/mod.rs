pub mod comment;
pub mod content;
pub mod favourite;
pub mod genre;
pub mod root;
pub mod song;
pub mod user;

use axum::{routing::get, Router};

use crate::db::Database;
use comment::comment_routes;
use content::content_routes;
use favourite::favourite_routes;
use genre::genre_routes;
use root::{health_check_route, root_route};
use song::song_routes;
use user::user_routes;

pub fn app(database: Database) -> Router {
    Router::new()
        .route("/", get(root_route))
        .route("/health", get(health_check_route))
        .merge(content_routes())
        .merge(song_routes())
        .merge(user_routes())
        .merge(genre_routes())
        .merge(favourite_routes())
        .merge(comment_routes())
        .with_state(database)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    // A lazy pool never connects until a query runs, so routes that stay
    // out of the database can be exercised without a server.
    fn test_app() -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/songshare")
            .unwrap();
        app(Database::from_pool(pool))
    }

    #[tokio::test]
    async fn info_page_is_served_at_root() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(std::str::from_utf8(&body).unwrap().contains("songshare API"));
    }

    #[tokio::test]
    async fn health_check_reports_ok() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn resource_item_routes_are_stubs() {
        for method in ["GET", "DELETE", "PATCH"] {
            let response = test_app()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri("/resources/1")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        }
    }

    #[tokio::test]
    async fn unknown_paths_fall_through_to_404() {
        let response = test_app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
