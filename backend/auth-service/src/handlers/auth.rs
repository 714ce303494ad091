/// Registration and login handlers.
use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::user_repo;
use crate::models::{LoginRequest, PublicUser, RegisterRequest, Role};
use crate::security::{password, TokenService};
use crate::{AppError, Result};

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

/// POST /api/register
pub async fn register(
    pool: web::Data<SqlitePool>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::InvalidInput(
            "Username and password are required".to_string(),
        ));
    }

    // Check for the duplicate before writing so it is classified as a
    // conflict instead of surfacing as a bare storage failure.
    if user_repo::find_by_username(pool.get_ref(), &payload.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Registration failed".to_string()));
    }

    let password_hash = password::hash_password(&payload.password)?;

    let user = match user_repo::create_user(
        pool.get_ref(),
        &payload.username,
        &payload.email,
        &password_hash,
        Role::User,
    )
    .await
    {
        Ok(user) => user,
        // Lost a race on the unique index; same external shape as the
        // pre-check.
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(AppError::Conflict("Registration failed".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(username = %user.username, user_id = user.id, "new user registered");

    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "User registered successfully".to_string(),
        user_id: user.id,
    }))
}

/// POST /api/login
///
/// An unknown username and a wrong password produce byte-identical
/// responses; the handler never tells a caller which factor failed.
pub async fn login(
    pool: web::Data<SqlitePool>,
    tokens: web::Data<TokenService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let user = user_repo::find_by_username(pool.get_ref(), &payload.username).await?;

    let verified = user
        .as_ref()
        .map(|u| password::verify_password(&payload.password, &u.password_hash))
        .unwrap_or(false);

    let Some(user) = user.filter(|_| verified) else {
        return Err(AppError::Unauthenticated("Invalid credentials".to_string()));
    };

    let token = tokens.issue(&user)?;

    tracing::info!(username = %user.username, "user logged in");

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user: user.into(),
    }))
}
