//! Hotel Booking Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the hotel booking service. It includes:
//!
//! - Domain models (Enrollment, Ticket, Room, Booking, etc.)
//! - Repository and service traits used as injection seams
//! - Unified error handling with HTTP response mapping
//! - Application configuration
//! - Deterministic fixtures for tests (`testing` feature)

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

#[cfg(any(test, feature = "testing"))]
pub mod fixtures;

pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
