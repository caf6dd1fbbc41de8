//! Actix-web authentication extractor
//!
//! Resolves the calling user from the JWT token of the request.

use crate::jwt::JwtService;
use crate::Claims;
use actix_web::{dev::Payload, error::ErrorUnauthorized, web, FromRequest, HttpRequest};
use booking_core::error::AppError;
use futures::future::{ready, Ready};
use std::sync::Arc;
use tracing::{debug, warn};

/// Cookie checked when no Authorization header is present
pub const TOKEN_COOKIE: &str = "token";

/// Bearer token from the Authorization header, else the token cookie
fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
        .or_else(|| req.cookie(TOKEN_COOKIE).map(|c| c.value().to_string()))
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    let jwt_service = req
        .app_data::<web::Data<Arc<JwtService>>>()
        .ok_or_else(|| {
            warn!("JwtService not registered as app data");
            AppError::Unauthorized("Authentication service not configured".to_string())
        })?;

    let token = bearer_token(req).ok_or_else(|| {
        debug!("No authentication token in request");
        AppError::Unauthorized("No authentication token provided".to_string())
    })?;

    let claims = jwt_service.validate_token(&token)?;

    Ok(AuthenticatedUser {
        user_id: claims.user_id(),
        claims,
    })
}

/// Authenticated user extractor
///
/// Requires a `web::Data<Arc<JwtService>>` registered on the app. Any
/// failure answers 401.
///
/// ```no_run
/// use actix_web::HttpResponse;
/// use booking_auth::middleware::AuthenticatedUser;
///
/// async fn protected_handler(user: AuthenticatedUser) -> HttpResponse {
///     HttpResponse::Ok().json(serde_json::json!({ "user_id": user.user_id }))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Id of the authenticated user
    pub user_id: i32,

    /// Full claims from the JWT token
    pub claims: Claims,
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map_err(|e| {
            warn!(error = %e, "Request authentication failed");
            ErrorUnauthorized(e)
        }))
    }
}
