//! Booking handlers
//!
//! HTTP handlers for the hotel room booking of the authenticated user.
//! Expects a `web::Data<Arc<dyn BookingService>>` and a
//! `web::Data<Arc<JwtService>>` registered on the app.

use crate::dto::{ApiResponse, BookingCreatedResponse, BookingResponse, CreateBookingRequest};
use actix_web::{web, HttpResponse};
use booking_auth::AuthenticatedUser;
use booking_core::traits::BookingService;
use booking_core::AppError;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Get the booking of the current user
///
/// GET /api/v1/booking
#[instrument(skip(service, user), fields(user_id = user.user_id))]
pub async fn get_booking(
    service: web::Data<Arc<dyn BookingService>>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    debug!("Fetching booking");

    let booking = service.get_booking(user.user_id).await?;

    Ok(HttpResponse::Ok().json(BookingResponse::from(booking)))
}

/// Book a room for the current user
///
/// POST /api/v1/booking
#[instrument(skip(service, user, req), fields(user_id = user.user_id, room_id = req.room_id))]
pub async fn create_booking(
    service: web::Data<Arc<dyn BookingService>>,
    user: AuthenticatedUser,
    req: web::Json<CreateBookingRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Booking request validation failed: {}", e);
        AppError::BadRequest(e.to_string())
    })?;

    let booking = service
        .booking_room_by_id(user.user_id, req.room_id)
        .await?;

    info!("Booking {} created", booking.id);

    Ok(HttpResponse::Created().json(ApiResponse::with_message(
        BookingCreatedResponse::from(booking),
        "Booking created successfully",
    )))
}

/// Configure booking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/booking")
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
            )
            .route("", web::get().to(get_booking))
            .route("", web::post().to(create_booking)),
    );
}
