//! HS256 token validation
//!
//! The service shares its secret with the sign-in service that issues the
//! tokens. `create_token` signs claims with the same key and exists so the
//! extractor can be exercised end to end.

use crate::claims::Claims;
use booking_core::error::AppError;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, error, warn};

/// JWT Service for token validation
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create a new JWT service from the shared secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign `claims` as they are
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidToken` if encoding fails
    pub fn create_token(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "Failed to create JWT token");
            AppError::InvalidToken(format!("Token creation failed: {}", e))
        })
    }

    /// Validate a JWT token and extract claims
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `AppError::TokenExpired` if the token has expired
    /// - `AppError::InvalidToken` if the token is invalid
    ///
    /// # Examples
    ///
    /// ```
    /// use booking_auth::{JwtService, Claims};
    ///
    /// let jwt_service = JwtService::new("secret");
    /// let token = jwt_service.create_token(&Claims::new(9, "guest@example.com", 60))?;
    /// let decoded = jwt_service.validate_token(&token)?;
    /// assert_eq!(decoded.sub, 9);
    /// # Ok::<(), booking_core::error::AppError>(())
    /// ```
    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    warn!("Token expired");
                    AppError::TokenExpired
                }
                _ => {
                    warn!(error = %e, "Invalid token");
                    AppError::InvalidToken(format!("Token validation failed: {}", e))
                }
            })?
            .claims;

        // Validation allows clock leeway; expiry is strict here
        if claims.is_expired() {
            warn!(user_id = claims.sub, "Token expired within leeway");
            return Err(AppError::TokenExpired);
        }

        debug!(user_id = claims.sub, "Token validated");

        Ok(claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
