/// Bearer-token authentication for protected routes.
///
/// Two entry points share one verification path: `JwtAuthMiddleware` gates a
/// whole scope, and the `AuthenticatedUser` extractor authenticates a single
/// handler (reusing the middleware's result when one already ran).
///
/// Boundary contract: a missing or unusable Authorization header is 401; a
/// header that is present but fails verification is 403. Clients can tell
/// "you sent nothing" from "you sent something bad", and nothing more.
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::error::AppError;
use crate::models::Role;
use crate::security::TokenService;

/// Verified identity of the requester, inserted into request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Extract and verify the bearer credential on a request.
pub fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthenticated("Authentication required".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthenticated("Authentication required".to_string()))?;

    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::Internal("Internal server error".to_string()))?;

    let claims = tokens.verify(token)?;
    let id = claims.user_id()?;

    Ok(AuthenticatedUser {
        id,
        username: claims.username,
        role: claims.role,
    })
}

/// JWT authentication middleware factory.
pub struct JwtAuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddlewareService<S>;
    type Future = std::future::Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        std::future::ready(Ok(JwtAuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct JwtAuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match authenticate(req.request()) {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    tracing::debug!(error = %err, "request rejected by auth middleware");
                    let (req, _) = req.into_parts();
                    let res = err.error_response();
                    Ok(ServiceResponse::new(req, res).map_into_right_body())
                }
            }
        })
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(user) = req.extensions().get::<AuthenticatedUser>().cloned() {
            return ready(Ok(user));
        }

        ready(authenticate(req).map_err(Error::from))
    }
}
