//! JWT claims
//!
//! Tokens are issued by the platform's sign-in service with the user id as
//! subject.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (user id)
    pub sub: i32,

    /// User email
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims for `user_id` valid for `ttl_secs` from now
    ///
    /// A negative `ttl_secs` yields already expired claims.
    ///
    /// ```
    /// use booking_auth::Claims;
    ///
    /// let claims = Claims::new(7, "guest@example.com", 60);
    /// assert_eq!(claims.user_id(), 7);
    /// assert!(!claims.is_expired());
    /// ```
    pub fn new(user_id: i32, email: &str, ttl_secs: i64) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
        }
    }

    /// Whether `exp` has passed, without clock leeway
    pub fn is_expired(&self) -> bool {
        self.exp <= Utc::now().timestamp()
    }

    /// User id carried in the subject
    pub fn user_id(&self) -> i32 {
        self.sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let claims = Claims::new(3, "guest@example.com", 3600);
        let now = Utc::now().timestamp();

        assert_eq!(claims.user_id(), 3);
        assert_eq!(claims.email, "guest@example.com");
        assert!(claims.iat <= now);
        assert!(claims.exp > now && claims.exp <= now + 3600);
    }

    #[test]
    fn test_expired_claims() {
        assert!(Claims::new(1, "guest@example.com", -3600).is_expired());
        assert!(Claims::new(1, "guest@example.com", 0).is_expired());
    }
}
