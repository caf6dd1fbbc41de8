//! Enrollment and address models
//!
//! An enrollment is the user's registered profile for the event. Having one
//! is the first gate for booking a hotel room.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Enrollment entity, loaded together with its addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Unique identifier
    pub id: i32,

    /// Full name
    pub name: String,

    /// Brazilian taxpayer id
    pub cpf: String,

    /// Date of birth
    pub birthday: DateTime<Utc>,

    /// Contact phone
    pub phone: String,

    /// Owning user
    pub user_id: i32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Addresses registered for this enrollment
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// Postal address attached to an enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: i32,
    pub cep: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub number: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
    pub enrollment_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
