/// Bearer token issuance and verification (HS256).
///
/// The keys live in a `TokenService` value built once at startup and handed
/// to handlers through app data; nothing here reads ambient global state.
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::{Role, User};
use crate::{AppError, Result};

/// Identity claims carried by a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id, as a string per JWT convention)
    pub sub: String,
    pub username: String,
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> Result<i64> {
        self.sub.parse().map_err(|_| AppError::InvalidToken)
    }
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        TokenService {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Sign a token for the given user. Expiry is a fixed window from now;
    /// there is no server-side revocation, so expiry is the only
    /// invalidation mechanism.
    pub fn issue(&self, user: &User) -> Result<String> {
        let now = Utc::now();

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "token issuance failed");
            AppError::Internal("Internal server error".to_string())
        })
    }

    /// Decode and validate a token.
    ///
    /// Every failure mode - bad signature, malformed encoding, expired -
    /// collapses into the single `InvalidToken` error so callers cannot
    /// probe for which check rejected them.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidToken)
    }
}
