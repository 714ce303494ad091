pub mod post_repo;
pub mod user_repo;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::models::Role;
use crate::security::password;
use crate::{AppError, Result};

/// Create the connection pool.
///
/// The default database is `sqlite::memory:`; a single pooled connection
/// that never expires is what keeps the in-memory rows alive for the life
/// of the process, and it also serializes writes.
pub async fn create_pool(database_url: &str) -> std::result::Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(database_url)
        .await
}

/// Create the schema. Idempotent; safe to run on every startup.
pub async fn init_schema(pool: &SqlitePool) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL DEFAULT '',
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'user',
            created_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            author_id INTEGER NOT NULL REFERENCES users(id),
            created_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Seed the admin account and the welcome post.
///
/// The admin password comes from configuration; the in-memory database is
/// empty on every start, but the username pre-check keeps this idempotent
/// against file-backed databases too.
pub async fn seed_demo_data(pool: &SqlitePool, admin_password: &str) -> Result<()> {
    if user_repo::find_by_username(pool, "admin").await?.is_some() {
        return Ok(());
    }

    let password_hash = password::hash_password(admin_password)?;
    let admin = user_repo::create_user(pool, "admin", "admin@example.com", &password_hash, Role::Admin)
        .await
        .map_err(AppError::from)?;

    post_repo::create_post(pool, "Welcome", "Welcome to our platform!", admin.id)
        .await
        .map_err(AppError::from)?;

    tracing::info!(admin_id = admin.id, "seed data created");
    Ok(())
}
