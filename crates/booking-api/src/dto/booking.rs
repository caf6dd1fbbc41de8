//! Booking DTOs
//!
//! Request and response types for the booking endpoints.

use booking_core::models::{Booking, BookingWithRoom, Room};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Booking creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// Room to book
    #[validate(range(min = 1, message = "room_id must be a positive integer"))]
    pub room_id: i32,
}

/// Body of a successful booking creation
#[derive(Debug, Clone, Serialize)]
pub struct BookingCreatedResponse {
    /// Id of the new booking
    pub booking_id: i32,
}

impl From<Booking> for BookingCreatedResponse {
    fn from(booking: Booking) -> Self {
        Self {
            booking_id: booking.id,
        }
    }
}

/// The booking of the current user, with its room
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    /// Booking id
    pub id: i32,
    /// Booked room
    pub room: Room,
}

impl From<BookingWithRoom> for BookingResponse {
    fn from(booking: BookingWithRoom) -> Self {
        Self {
            id: booking.booking.id,
            room: booking.room,
        }
    }
}
