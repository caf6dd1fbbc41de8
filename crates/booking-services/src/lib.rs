//! Business logic services for the hotel booking service
//!
//! # Architecture
//!
//! Services are designed to be composable and testable:
//! - Each service owns its dependencies as `Arc`-shared repository traits
//! - All operations are instrumented with tracing
//! - Every failure is an `AppError` returned unchanged to the caller
//!
//! # Services
//!
//! - `BookingServiceImpl` - Eligibility and capacity checks around booking creation

pub mod booking_service;

pub use booking_service::{BookingServiceImpl, PgBookingService};
