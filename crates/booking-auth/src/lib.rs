//! Authentication for the hotel booking service
//!
//! Tokens are issued by the platform's sign-in service; this crate validates
//! them with the shared secret and exposes the authenticated user id to
//! Actix-web handlers.
//!
//! # Features
//!
//! - JWT token validation against the shared secret
//! - Request extractor for authenticated users
//!
//! # Examples
//!
//! ## Validating a JWT token
//!
//! ```no_run
//! use booking_auth::JwtService;
//!
//! let jwt_service = JwtService::new("shared-secret");
//! let claims = jwt_service.validate_token("eyJhbGciOiJIUzI1NiJ9...")?;
//! println!("user {}", claims.user_id());
//! # Ok::<(), booking_core::error::AppError>(())
//! ```
//!
//! ## Using the extractor in Actix-web
//!
//! ```no_run
//! use actix_web::HttpResponse;
//! use booking_auth::AuthenticatedUser;
//!
//! async fn protected_route(user: AuthenticatedUser) -> HttpResponse {
//!     HttpResponse::Ok().json(serde_json::json!({ "user_id": user.user_id }))
//! }
//! ```

pub mod claims;
pub mod jwt;
pub mod middleware;

pub use claims::Claims;
pub use jwt::JwtService;
pub use middleware::AuthenticatedUser;
