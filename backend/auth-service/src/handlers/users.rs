/// User lookup, listing, search, and profile update handlers.
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::user_repo;
use crate::middleware::AuthenticatedUser;
use crate::models::{PublicUser, UpdateProfileRequest};
use crate::validators::validate_profile_update;
use crate::{AppError, Result};

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub user: PublicUser,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/user/{id}
pub async fn get_user(
    path: web::Path<String>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse> {
    // A non-numeric id cannot name a user; same outcome as an unknown one.
    let id: i64 = path
        .into_inner()
        .parse()
        .map_err(|_| AppError::NotFound("User not found".to_string()))?;

    match user_repo::find_by_id(pool.get_ref(), id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(PublicUser::from(user))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// GET /api/users (admin only)
pub async fn list_users(
    user: AuthenticatedUser,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    let users = user_repo::list_users(pool.get_ref()).await?;
    let users: Vec<PublicUser> = users.into_iter().map(PublicUser::from).collect();

    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/search?q=
pub async fn search_users(
    query: web::Query<SearchQuery>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse> {
    let results = user_repo::search_users(pool.get_ref(), &query.q).await?;
    Ok(HttpResponse::Ok().json(results))
}

/// PUT /api/user/{id}
///
/// Authorization runs before field validation: the requester must be the
/// target user or an admin. Role is not an updatable field here.
pub async fn update_profile(
    user: AuthenticatedUser,
    path: web::Path<String>,
    pool: web::Data<SqlitePool>,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse> {
    let id: i64 = path
        .into_inner()
        .parse()
        .map_err(|_| AppError::InvalidInput("Invalid input data".to_string()))?;

    if user.id != id && !user.is_admin() {
        return Err(AppError::Forbidden(
            "Not authorized to update this profile".to_string(),
        ));
    }

    let update = validate_profile_update(&payload)?;

    match user_repo::update_profile(
        pool.get_ref(),
        id,
        update.username.as_deref(),
        update.email.as_deref(),
    )
    .await?
    {
        Some(updated) => {
            tracing::info!(user_id = id, "profile updated");
            Ok(HttpResponse::Ok().json(UpdateProfileResponse {
                message: "Profile updated successfully".to_string(),
                user: updated.into(),
            }))
        }
        // Unknown target collapses into a generic failure; authorization has
        // already said as much about existence as this route ever will.
        None => {
            tracing::error!(user_id = id, "profile update targeted missing user");
            Err(AppError::Internal("Profile update failed".to_string()))
        }
    }
}
