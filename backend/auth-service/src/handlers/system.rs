use actix_web::HttpResponse;
use chrono::Utc;
use serde::Serialize;

use crate::middleware::AuthenticatedUser;
use crate::{AppError, Result};

#[derive(Debug, Serialize)]
pub struct SystemInfoResponse {
    pub platform: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// GET /api/system-info (admin only)
///
/// Static build/platform facts and a timestamp; nothing secret-shaped
/// belongs in this response.
pub async fn system_info(user: AuthenticatedUser) -> Result<HttpResponse> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    Ok(HttpResponse::Ok().json(SystemInfoResponse {
        platform: std::env::consts::OS,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
    }))
}
