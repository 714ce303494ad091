use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::Post;

pub async fn create_post(
    pool: &SqlitePool,
    title: &str,
    content: &str,
    author_id: i64,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        "INSERT INTO posts (title, content, author_id, created_at) \
         VALUES (?, ?, ?, ?) \
         RETURNING id, title, content, author_id, created_at",
    )
    .bind(title)
    .bind(content)
    .bind(author_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Newest first. The limit bounds the response; listings are not paginated
/// at this scale.
pub async fn list_posts(pool: &SqlitePool, limit: i64) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        "SELECT id, title, content, author_id, created_at \
         FROM posts ORDER BY created_at DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
