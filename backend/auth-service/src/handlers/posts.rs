use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::db::post_repo;
use crate::Result;

// Listing cap; the feed has no pagination at this scale.
const POSTS_LIMIT: i64 = 100;

/// GET /api/posts
pub async fn list_posts(pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    let posts = post_repo::list_posts(pool.get_ref(), POSTS_LIMIT).await?;
    Ok(HttpResponse::Ok().json(posts))
}
