/// Shared fixtures for integration tests: an in-memory database with the
/// seed data, a token service, and request helpers.
use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App, Error};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use auth_service::db;
use auth_service::routes;
use auth_service::security::TokenService;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ADMIN_PASSWORD: &str = "test-admin-password";

/// Fresh in-memory database with schema and seed rows, plus a token service.
pub async fn setup_state() -> (SqlitePool, TokenService) {
    let pool = db::create_pool("sqlite::memory:")
        .await
        .expect("failed to create test pool");
    db::init_schema(&pool).await.expect("failed to create schema");
    db::seed_demo_data(&pool, ADMIN_PASSWORD)
        .await
        .expect("failed to seed test data");

    (pool, TokenService::new(TEST_SECRET, 3600))
}

/// Build the full application the way `main` does.
pub async fn spawn_app(
    pool: &SqlitePool,
    tokens: &TokenService,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(tokens.clone()))
            .configure(routes::configure_routes),
    )
    .await
}

pub async fn send<S, B>(app: &S, req: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

pub async fn register<S, B>(app: &S, username: &str, email: &str, password: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({ "username": username, "email": email, "password": password }))
        .to_request();
    send(app, req).await
}

pub async fn login<S, B>(app: &S, username: &str, password: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    send(app, req).await
}

/// Register a fresh user and log them in; returns (user id, bearer token).
pub async fn register_and_login<S, B>(app: &S, username: &str, password: &str) -> (i64, String)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let (status, _) = register(app, username, &format!("{username}@example.com"), password).await;
    assert_eq!(status, StatusCode::CREATED, "registration should succeed");

    let (status, body) = login(app, username, password).await;
    assert_eq!(status, StatusCode::OK, "login should succeed");

    let id = body["user"]["id"].as_i64().expect("login body carries user id");
    let token = body["token"].as_str().expect("login body carries token").to_string();
    (id, token)
}

pub async fn admin_token<S, B>(app: &S) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let (status, body) = login(app, "admin", ADMIN_PASSWORD).await;
    assert_eq!(status, StatusCode::OK, "seed admin login should succeed");
    body["token"].as_str().expect("token present").to_string()
}
