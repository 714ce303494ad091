use serde::Deserialize;
use std::env;

/// Development fallback for the token-signing secret. Loudly logged at
/// startup whenever it is in effect; never treat it as a production secret.
pub const DEV_JWT_SECRET: &str = "dev-secret-do-not-use-in-production";

/// Development fallback for the seed admin account password.
pub const DEV_ADMIN_PASSWORD: &str = "password123";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_env")]
    pub env: String,

    #[serde(default = "default_app_host")]
    pub host: String,

    #[serde(default = "default_app_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,

    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins. "*" allows any origin
    /// (NOT recommended for production).
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    pub admin_password: String,
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_app_host() -> String {
    "127.0.0.1".to_string()
}

fn default_app_port() -> u16 {
    5000
}

fn default_database_url() -> String {
    // The platform runs against an in-memory SQLite database; the rows live
    // only as long as the process.
    "sqlite::memory:".to_string()
}

fn default_token_ttl_secs() -> i64 {
    86400 // 24 hours
}

fn default_allowed_origins() -> String {
    "http://localhost:3000".to_string()
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let app = AppConfig {
            env: env::var("APP_ENV").unwrap_or_else(|_| default_app_env()),
            host: env::var("APP_HOST").unwrap_or_else(|_| default_app_host()),
            port: env::var("APP_PORT")
                .unwrap_or_else(|_| default_app_port().to_string())
                .parse()
                .unwrap_or_else(|_| default_app_port()),
        };

        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url()),
        };

        let jwt = JwtConfig {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string()),
            token_ttl_secs: env::var("JWT_TOKEN_TTL_SECS")
                .unwrap_or_else(|_| default_token_ttl_secs().to_string())
                .parse()
                .unwrap_or_else(|_| default_token_ttl_secs()),
        };

        let cors = CorsConfig {
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| default_allowed_origins()),
        };

        let seed = SeedConfig {
            admin_password: env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEV_ADMIN_PASSWORD.to_string()),
        };

        Config {
            app,
            database,
            jwt,
            cors,
            seed,
        }
    }

    pub fn is_production(&self) -> bool {
        self.app.env == "production"
    }

    /// True when the signing secret is the development fallback.
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt.secret == DEV_JWT_SECRET
    }
}
