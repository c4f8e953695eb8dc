use tracing::{error, info, Level};
use tracing_subscriber::{fmt, EnvFilter};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod controllers;
mod db;
mod error;
mod merge;
mod models;
mod routers;
mod secrets;

use crate::secrets::SECRET_MANAGER;
use db::Database;

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    let database = match Database::new().await {
        Ok(db) => {
            info!("Connected to PostgreSQL database");
            db
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            panic!("Database connection required");
        }
    };

    let port = SECRET_MANAGER.get("PORT");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routers::app(database)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    info!("Server is listening on port {}!", port);

    axum::serve(listener, app).await.unwrap();
}
