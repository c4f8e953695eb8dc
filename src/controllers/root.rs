use axum::{response::Html, Json};
use serde_json::json;

const INFO_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>songshare API</title></head>
  <body>
    <h1>songshare API</h1>
    <p>CRUD endpoints over songs, users, genres, favourites and comments.</p>
    <ul>
      <li>GET /resources, POST /resources</li>
      <li>GET /songs, POST /songs</li>
      <li>GET /users</li>
      <li>GET /genres, GET /genres/{name}</li>
      <li>POST /songs_genres, DELETE /songs_genres/{id}</li>
      <li>POST /favourites, GET /favourites/{id}, DELETE /favourites/{id}</li>
      <li>POST /comments, GET /comments</li>
      <li>DELETE /content/{id}</li>
    </ul>
  </body>
</html>
"#;

pub struct RootController;

impl RootController {
    pub async fn root() -> Html<&'static str> {
        Html(INFO_PAGE)
    }

    pub async fn health_check() -> Json<serde_json::Value> {
        Json(json!({ "status": "ok" }))
    }
}
