//! Hotel Booking Database Layer
//!
//! This crate provides PostgreSQL database access and repository implementations
//! for the booking service. It includes:
//!
//! - Connection pool management with sqlx
//! - Repository implementations for enrollments, tickets, rooms and bookings
//! - Row seeding for database-backed tests (`testing` feature)
//!
//! The schema itself is owned by the platform's ORM migrations; tables and
//! columns keep its quoted camelCase naming.

pub mod pool;
pub mod repositories;

#[cfg(any(test, feature = "testing"))]
pub mod seed;

pub use pool::create_pool;
pub use repositories::*;

// Re-export commonly used types
pub use booking_core::{AppError, AppResult};
pub use sqlx::PgPool;
