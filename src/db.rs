use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::models::comment::{Comment, CommentWithUser, CreateCommentRequest};
use crate::models::content::{Content, CreateResourceRequest};
use crate::models::favourite::Favourite;
use crate::models::genre::{Genre, SongGenre};
use crate::models::song::SongGenreRow;
use crate::models::user::User;
use crate::secrets::SECRET_MANAGER;

/// Shared database handle, cloned into every handler via axum state.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new() -> Result<Self, sqlx::Error> {
        let database_url = SECRET_MANAGER.get("DATABASE_URL");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await?;

        Ok(Self { pool })
    }

    #[cfg(test)]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_content(&self) -> Result<Vec<Content>, sqlx::Error> {
        sqlx::query_as::<_, Content>("SELECT * FROM content")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create_resource(
        &self,
        resource: &CreateResourceRequest,
    ) -> Result<Content, sqlx::Error> {
        // Column set follows which optional field the request carries.
        let query = match &resource.youtube_url {
            Some(youtube_url) => sqlx::query_as::<_, Content>(
                "INSERT INTO content (title, summary, youtube_url, article_url)
                 VALUES ($1, $2, $3, $4) RETURNING *",
            )
            .bind(&resource.title)
            .bind(&resource.summary)
            .bind(youtube_url)
            .bind(&resource.article_url),
            None => sqlx::query_as::<_, Content>(
                "INSERT INTO content (title, summary, article_url)
                 VALUES ($1, $2, $3) RETURNING *",
            )
            .bind(&resource.title)
            .bind(&resource.summary)
            .bind(&resource.article_url),
        };

        query.fetch_one(&self.pool).await
    }

    pub async fn list_songs_with_genres(&self) -> Result<Vec<SongGenreRow>, sqlx::Error> {
        sqlx::query_as::<_, SongGenreRow>(
            "SELECT content.id, content.title, content.artist, content.youtube_url,
                    content.spotify_url, content.userid, users.username,
                    content.created_at, genres.genre
             FROM content
             LEFT JOIN users ON users.id = content.userid
             LEFT JOIN songs_genres ON songs_genres.song_id = content.id
             LEFT JOIN genres ON genres.id = songs_genres.genre_id",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// `url_column` is one of the two fixed url column names, never
    /// client-supplied text.
    pub async fn create_song(
        &self,
        title: &str,
        artist: &str,
        url_column: &str,
        url: &str,
        userid: i32,
    ) -> Result<Content, sqlx::Error> {
        let query_text = format!(
            "INSERT INTO content (title, artist, {}, userid)
             VALUES ($1, $2, $3, $4) RETURNING *",
            url_column
        );

        sqlx::query_as::<_, Content>(&query_text)
            .bind(title)
            .bind(artist)
            .bind(url)
            .bind(userid)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn delete_content(&self, id: i32) -> Result<Option<Content>, sqlx::Error> {
        sqlx::query_as::<_, Content>("DELETE FROM content WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn list_genres(&self) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT * FROM genres")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_genre_id_by_name(&self, name: &str) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>("SELECT id FROM genres WHERE genre = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn add_song_genre(
        &self,
        song_id: i32,
        genre_id: i32,
    ) -> Result<SongGenre, sqlx::Error> {
        sqlx::query_as::<_, SongGenre>(
            "INSERT INTO songs_genres (song_id, genre_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(song_id)
        .bind(genre_id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete_song_genres(&self, song_id: i32) -> Result<Vec<SongGenre>, sqlx::Error> {
        sqlx::query_as::<_, SongGenre>(
            "DELETE FROM songs_genres WHERE song_id = $1 RETURNING *",
        )
        .bind(song_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create_favourite(
        &self,
        song_id: i32,
        user_id: i32,
    ) -> Result<Favourite, sqlx::Error> {
        sqlx::query_as::<_, Favourite>(
            "INSERT INTO favourites (song_id, favourited_user) VALUES ($1, $2) RETURNING *",
        )
        .bind(song_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list_favourites_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<SongGenreRow>, sqlx::Error> {
        sqlx::query_as::<_, SongGenreRow>(
            "SELECT content.id, content.title, content.artist, content.youtube_url,
                    content.spotify_url, content.userid, users.username,
                    content.created_at, genres.genre
             FROM favourites
             JOIN content ON content.id = favourites.song_id
             LEFT JOIN users ON users.id = content.userid
             LEFT JOIN songs_genres ON songs_genres.song_id = content.id
             LEFT JOIN genres ON genres.id = songs_genres.genre_id
             WHERE favourites.favourited_user = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn delete_favourite(
        &self,
        song_id: i32,
        user_id: i32,
    ) -> Result<Option<Favourite>, sqlx::Error> {
        sqlx::query_as::<_, Favourite>(
            "DELETE FROM favourites WHERE song_id = $1 AND favourited_user = $2 RETURNING *",
        )
        .bind(song_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn create_comment(
        &self,
        comment: &CreateCommentRequest,
    ) -> Result<Comment, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (user_id, comment, song_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(comment.userid)
        .bind(&comment.comment_text)
        .bind(comment.song_id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list_comments(&self) -> Result<Vec<CommentWithUser>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithUser>(
            "SELECT comments.id, comments.user_id, users.username, comments.comment,
                    comments.song_id, comments.created_at
             FROM comments
             JOIN users ON users.id = comments.user_id
             ORDER BY comments.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
    }
}
