use sqlx::{PgPool, postgres::PgPoolOptions};
use sqlx::types::chrono::Utc;
use tracing::debug;

use crate::models::song::{Song, SongDetail};
use crate::secrets::SECRET_MANAGER;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new() -> Result<Self, sqlx::Error> {
        let database_url = SECRET_MANAGER.get("DATABASE_URL");
        debug!("connecting to database");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Pool that only connects on first use, for exercising handler
    /// paths that never reach the database.
    #[cfg(test)]
    pub fn connect_lazy(url: &str) -> Self {
        let pool = PgPoolOptions::new()
            .connect_lazy(url)
            .expect("invalid database url");
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn create_song(
        &self,
        group: &str,
        title: &str,
        detail: &SongDetail,
    ) -> Result<Song, sqlx::Error> {
        sqlx::query_as::<_, Song>(
            "INSERT INTO songs (group_name, title, release_date, text, link, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, group_name, title, release_date, text, link, created_at",
        )
        .bind(group)
        .bind(title)
        .bind(&detail.release_date)
        .bind(&detail.text)
        .bind(&detail.link)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list_songs(
        &self,
        group: Option<&str>,
        title: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Song>, sqlx::Error> {
        // Filters are exact matches, applied only when the caller set them.
        sqlx::query_as::<_, Song>(
            "SELECT id, group_name, title, release_date, text, link, created_at
             FROM songs
             WHERE ($1::text IS NULL OR group_name = $1)
               AND ($2::text IS NULL OR title = $2)
             ORDER BY id
             LIMIT $3 OFFSET $4",
        )
        .bind(group)
        .bind(title)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_song(&self, id: i32) -> Result<Option<Song>, sqlx::Error> {
        sqlx::query_as::<_, Song>(
            "SELECT id, group_name, title, release_date, text, link, created_at
             FROM songs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Full-record replace. Returns the number of rows touched so the
    /// handler can turn zero into a 404.
    pub async fn update_song(&self, song: &Song) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE songs
             SET group_name = $1, title = $2, release_date = $3, text = $4, link = $5
             WHERE id = $6",
        )
        .bind(&song.group_name)
        .bind(&song.title)
        .bind(&song.release_date)
        .bind(&song.text)
        .bind(&song.link)
        .bind(song.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_song(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
