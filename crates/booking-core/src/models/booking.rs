//! Booking models
//!
//! A booking links one user to one room. It is created once the eligibility
//! and capacity checks pass and is not mutated afterwards.

use super::hotel::Room;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking with its room joined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWithRoom {
    #[serde(flatten)]
    pub booking: Booking,
    pub room: Room,
}

/// Payload for creating a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub room_id: i32,
    pub user_id: i32,
}
