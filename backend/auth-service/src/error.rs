use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    /// No usable credential was presented at all.
    #[error("{0}")]
    Unauthenticated(String),

    /// A credential was presented but failed verification (bad signature,
    /// malformed, or expired). External callers are never told which; the
    /// boundary contract distinguishes this from a missing credential by
    /// status code alone.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// Duplicate unique field. The HTTP contract surfaces this as a generic
    /// failure rather than a 409; the surrounding clients expect that shape.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure. The message is the externally-safe form; anything
    /// sensitive is logged at the point of failure, not carried here.
    #[error("{0}")]
    Internal(String),

    #[error("Internal server error")]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken => StatusCode::FORBIDDEN,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Database(e) = self {
            // Storage detail stays in the logs; the wire gets a generic body.
            tracing::error!(error = %e, "storage operation failed");
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
