//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform user
///
/// Only the identity matters to booking; the rest is carried for completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: i32,

    /// Login email
    pub email: String,

    /// Password hash (never expose in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}
