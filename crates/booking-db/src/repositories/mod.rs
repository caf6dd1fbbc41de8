//! Repository implementations
//!
//! This module contains concrete implementations of the repository traits
//! defined in booking-core, using sqlx for PostgreSQL access.

pub mod booking_repo;
pub mod enrollment_repo;
pub mod room_repo;
pub mod ticket_repo;

pub use booking_repo::PgBookingRepository;
pub use enrollment_repo::PgEnrollmentRepository;
pub use room_repo::PgRoomRepository;
pub use ticket_repo::PgTicketRepository;
