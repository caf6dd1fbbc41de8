//! Booking service
//!
//! Validates that a user may book a hotel room and that the room still has
//! space before creating the booking:
//! - Eligibility: enrollment exists, ticket is paid, in person and includes hotel
//! - Capacity: the room exists and holds fewer bookings than its capacity
//!
//! Eligibility is checked before capacity, so an ineligible user gets
//! `CannotBooking` even when the room does not exist.

use async_trait::async_trait;
use booking_core::{
    models::{Booking, BookingWithRoom, NewBooking},
    traits::{
        BookingRepository, BookingService, EnrollmentRepository, RoomRepository,
        TicketRepository,
    },
    AppError, AppResult,
};
use booking_db::{
    PgBookingRepository, PgEnrollmentRepository, PgRoomRepository, PgTicketRepository,
};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Booking service backed by the PostgreSQL repositories
pub type PgBookingService = BookingServiceImpl<
    PgEnrollmentRepository,
    PgTicketRepository,
    PgRoomRepository,
    PgBookingRepository,
>;

/// Booking service implementation
pub struct BookingServiceImpl<E, T, R, B>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    R: RoomRepository,
    B: BookingRepository,
{
    enrollment_repo: Arc<E>,
    ticket_repo: Arc<T>,
    room_repo: Arc<R>,
    booking_repo: Arc<B>,
}

impl<E, T, R, B> BookingServiceImpl<E, T, R, B>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    R: RoomRepository,
    B: BookingRepository,
{
    /// Create a new booking service
    pub fn new(
        enrollment_repo: Arc<E>,
        ticket_repo: Arc<T>,
        room_repo: Arc<R>,
        booking_repo: Arc<B>,
    ) -> Self {
        Self {
            enrollment_repo,
            ticket_repo,
            room_repo,
            booking_repo,
        }
    }

    /// Check that `user_id` holds a ticket entitling them to a hotel room
    ///
    /// # Errors
    ///
    /// Returns `AppError::CannotBooking` if the user has no enrollment, no
    /// ticket, or a ticket that is unpaid, remote, or without hotel.
    #[instrument(skip(self))]
    pub async fn check_enrollment_ticket(&self, user_id: i32) -> AppResult<()> {
        let enrollment = self
            .enrollment_repo
            .find_with_address_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                warn!("User {} has no enrollment", user_id);
                AppError::CannotBooking
            })?;

        let ticket = self
            .ticket_repo
            .find_ticket_by_enrollment_id(enrollment.id)
            .await?
            .ok_or_else(|| {
                warn!("Enrollment {} has no ticket", enrollment.id);
                AppError::CannotBooking
            })?;

        if !ticket.allows_hotel_booking() {
            warn!(
                ticket_id = ticket.id,
                status = %ticket.status,
                is_remote = ticket.ticket_type.is_remote,
                includes_hotel = ticket.ticket_type.includes_hotel,
                "Ticket does not allow hotel booking"
            );
            return Err(AppError::CannotBooking);
        }

        debug!("User {} is eligible for hotel booking", user_id);
        Ok(())
    }

    /// Check that `room_id` exists and has a free slot
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for an unknown room and
    /// `AppError::CannotBooking` when the room is at capacity.
    #[instrument(skip(self))]
    pub async fn check_valid_booking(&self, room_id: i32) -> AppResult<()> {
        let room = self
            .room_repo
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", room_id)))?;

        let bookings = self.booking_repo.find_by_room_id(room_id).await?;

        if room.is_full(bookings.len()) {
            warn!(
                "Room {} is full: {} bookings for capacity {}",
                room_id,
                bookings.len(),
                room.capacity
            );
            return Err(AppError::CannotBooking);
        }

        debug!(
            "Room {} has {} of {} slots taken",
            room_id,
            bookings.len(),
            room.capacity
        );
        Ok(())
    }
}

impl PgBookingService {
    /// Build the service over PostgreSQL repositories sharing `pool`
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgEnrollmentRepository::new(pool.clone())),
            Arc::new(PgTicketRepository::new(pool.clone())),
            Arc::new(PgRoomRepository::new(pool.clone())),
            Arc::new(PgBookingRepository::new(pool)),
        )
    }
}

#[async_trait]
impl<E, T, R, B> BookingService for BookingServiceImpl<E, T, R, B>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    R: RoomRepository,
    B: BookingRepository,
{
    #[instrument(skip(self))]
    async fn booking_room_by_id(&self, user_id: i32, room_id: i32) -> AppResult<Booking> {
        if room_id <= 0 {
            warn!("Rejecting booking with invalid room id {}", room_id);
            return Err(AppError::BadRequest(format!(
                "room_id must be a positive integer, got {}",
                room_id
            )));
        }

        self.check_enrollment_ticket(user_id).await?;
        self.check_valid_booking(room_id).await?;

        let booking = self
            .booking_repo
            .create(&NewBooking { room_id, user_id })
            .await?;

        info!(
            "Booked room {} for user {}: booking {}",
            room_id, user_id, booking.id
        );

        Ok(booking)
    }

    #[instrument(skip(self))]
    async fn get_booking(&self, user_id: i32) -> AppResult<BookingWithRoom> {
        self.booking_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No booking for user {}", user_id)))
    }
}
