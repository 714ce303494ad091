use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_service::{config::Config, db, routes, security::TokenService};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Starting auth-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    if config.uses_dev_secret() {
        tracing::warn!(
            "JWT_SECRET is not set; using the development fallback secret. \
             Tokens signed with it are NOT secure."
        );
    }

    let pool = db::create_pool(&config.database.url).await?;
    db::init_schema(&pool).await?;
    db::seed_demo_data(&pool, &config.seed.admin_password).await?;

    tracing::info!("Database initialized at {}", config.database.url);

    let tokens = TokenService::new(&config.jwt.secret, config.jwt.token_ttl_secs);

    let bind_addr = (config.app.host.clone(), config.app.port);
    tracing::info!("Listening on {}:{}", bind_addr.0, bind_addr.1);

    let app_config = config.clone();
    HttpServer::new(move || {
        // Cors is not Clone; build it per worker from the config.
        let mut cors = Cors::default();
        for origin in app_config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else if !origin.is_empty() {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(tokens.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(routes::configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
