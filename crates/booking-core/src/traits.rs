//! Common traits for repositories and services
//!
//! Defines abstractions for database access and business logic. The
//! booking service depends only on these traits, so tests can swap in the
//! mockall-generated `Mock*` types (enabled with the `testing` feature).

use crate::error::AppError;
use crate::models::{Booking, BookingWithRoom, Enrollment, NewBooking, Room, Ticket};
use async_trait::async_trait;

/// Enrollment lookups
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Find the enrollment of a user, with its addresses
    async fn find_with_address_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<Enrollment>, AppError>;
}

/// Ticket lookups
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Find the ticket bought under an enrollment, with its ticket type
    async fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<Ticket>, AppError>;
}

/// Room lookups
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find room by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Room>, AppError>;
}

/// Booking storage
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// All current bookings of a room
    async fn find_by_room_id(&self, room_id: i32) -> Result<Vec<Booking>, AppError>;

    /// The booking held by a user, with its room
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<BookingWithRoom>, AppError>;

    /// Insert a new booking
    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError>;
}

/// Booking service trait
///
/// Entry point used by the HTTP layer.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Book `room_id` for `user_id` after eligibility and capacity checks
    async fn booking_room_by_id(&self, user_id: i32, room_id: i32) -> Result<Booking, AppError>;

    /// Fetch the booking held by `user_id`
    async fn get_booking(&self, user_id: i32) -> Result<BookingWithRoom, AppError>;
}
