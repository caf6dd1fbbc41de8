//! Domain models for the booking service
//!
//! These entities are owned by the wider event platform; this service only
//! reads them (and inserts bookings).

pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod ticket;
pub mod user;

pub use booking::{Booking, BookingWithRoom, NewBooking};
pub use enrollment::{Address, Enrollment};
pub use hotel::{Hotel, Room};
pub use ticket::{Ticket, TicketStatus, TicketType};
pub use user::User;
