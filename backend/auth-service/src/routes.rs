//! Route configuration
//!
//! Centralized route setup shared by `main` and the integration tests.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, Error, HttpRequest, HttpResponse};

use crate::handlers;
use crate::middleware::JwtAuthMiddleware;

/// Configure all routes for the application.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(handlers::health_check))
                .route("/register", web::post().to(handlers::register))
                .route("/login", web::post().to(handlers::login))
                .route("/search", web::get().to(handlers::search_users))
                .route("/posts", web::get().to(handlers::list_posts))
                // GET is public; PUT authenticates through the extractor so
                // both methods can share the path.
                .service(
                    web::resource("/user/{id}")
                        .route(web::get().to(handlers::get_user))
                        .route(web::put().to(handlers::update_profile)),
                )
                .service(
                    web::scope("")
                        .wrap(JwtAuthMiddleware)
                        .route("/users", web::get().to(handlers::list_users))
                        .route("/system-info", web::get().to(handlers::system_info)),
                ),
        );
}

/// Malformed or mistyped JSON bodies all map to the 400 contract shape
/// instead of actix's default error text.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest()
        .json(serde_json::json!({ "error": "Invalid input data" }));
    InternalError::from_response(err, response).into()
}
