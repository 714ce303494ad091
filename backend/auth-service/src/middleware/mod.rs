pub mod jwt_auth;

pub use jwt_auth::{authenticate, AuthenticatedUser, JwtAuthMiddleware};
