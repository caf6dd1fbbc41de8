//! API layer for the hotel booking service
//!
//! HTTP handlers for reading and creating the hotel room booking of the
//! authenticated user.

#![forbid(unsafe_code)]
#![warn(clippy::all, missing_docs)]

pub mod dto;
pub mod handlers;

// Re-export DTOs (common types)
pub use dto::ApiResponse;

// Re-export handler configuration functions
pub use handlers::configure_booking;
