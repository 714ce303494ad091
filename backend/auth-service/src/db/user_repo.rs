/// User repository - all database operations for user records.
///
/// Every statement is parameterized; usernames and emails are stored as
/// arbitrary text, and the bind boundary is what keeps metacharacters inert.
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{Role, SearchResult, User};

const USER_COLUMNS: &str = "id, username, email, password_hash, role, created_at";

pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
    role: Role,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (username, email, password_hash, role, created_at) \
         VALUES (?, ?, ?, ?, ?) \
         RETURNING id, username, email, password_hash, role, created_at",
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Apply a partial profile update. Only the supplied fields change; role and
/// password hash are not reachable from here. Returns `None` when the id is
/// unknown.
pub async fn update_profile(
    pool: &SqlitePool,
    id: i64,
    username: Option<&str>,
    email: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users \
         SET username = COALESCE(?, username), email = COALESCE(?, email) \
         WHERE id = ? \
         RETURNING id, username, email, password_hash, role, created_at",
    )
    .bind(username)
    .bind(email)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
        .fetch_all(pool)
        .await
}

/// Substring search over usernames and emails. The pattern is bound as a
/// parameter, never spliced into the statement.
pub async fn search_users(
    pool: &SqlitePool,
    query: &str,
) -> Result<Vec<SearchResult>, sqlx::Error> {
    let pattern = format!("%{query}%");

    sqlx::query_as::<_, SearchResult>(
        "SELECT username, email FROM users WHERE username LIKE ? OR email LIKE ?",
    )
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(pool)
    .await
}
