//! Booking repository implementation
//!
//! Provides PostgreSQL-backed storage for bookings. Occupancy is counted by
//! the caller from `find_by_room_id`; this layer does not lock rooms.

use booking_core::{
    models::{Booking, BookingWithRoom, NewBooking, Room},
    traits::BookingRepository,
    AppError, AppResult,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info, instrument};

/// PostgreSQL implementation of BookingRepository
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new booking repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    #[instrument(skip(self))]
    async fn find_by_room_id(&self, room_id: i32) -> AppResult<Vec<Booking>> {
        debug!("Finding bookings by room id: {}", room_id);

        let rows = sqlx::query_as::<sqlx::Postgres, BookingRow>(
            r#"
            SELECT
                id,
                "userId" AS user_id,
                "roomId" AS room_id,
                "createdAt" AS created_at,
                "updatedAt" AS updated_at
            FROM "Booking"
            WHERE "roomId" = $1
            ORDER BY id
            "#,
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error finding bookings of room {}: {}", room_id, e);
            AppError::Database(format!("Failed to fetch bookings: {}", e))
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Option<BookingWithRoom>> {
        debug!("Finding booking by user id: {}", user_id);

        let result = sqlx::query_as::<sqlx::Postgres, BookingWithRoomRow>(
            r#"
            SELECT
                b.id,
                b."userId" AS user_id,
                b."roomId" AS room_id,
                b."createdAt" AS created_at,
                b."updatedAt" AS updated_at,
                r.name AS room_name,
                r.capacity AS room_capacity,
                r."hotelId" AS room_hotel_id,
                r."createdAt" AS room_created_at,
                r."updatedAt" AS room_updated_at
            FROM "Booking" b
            JOIN "Room" r ON r.id = b."roomId"
            WHERE b."userId" = $1
            ORDER BY b.id
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error finding booking of user {}: {}", user_id, e);
            AppError::Database(format!("Failed to find booking: {}", e))
        })?;

        Ok(result.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn create(&self, booking: &NewBooking) -> AppResult<Booking> {
        debug!(
            "Creating booking of room {} for user {}",
            booking.room_id, booking.user_id
        );

        let row = sqlx::query_as::<sqlx::Postgres, BookingRow>(
            r#"
            INSERT INTO "Booking" ("userId", "roomId", "updatedAt")
            VALUES ($1, $2, NOW())
            RETURNING
                id,
                "userId" AS user_id,
                "roomId" AS room_id,
                "createdAt" AS created_at,
                "updatedAt" AS updated_at
            "#,
        )
        .bind(booking.user_id)
        .bind(booking.room_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error creating booking: {}", e);
            AppError::Database(format!("Failed to create booking: {}", e))
        })?;

        info!(
            "Created booking {} of room {} for user {}",
            row.id, row.room_id, row.user_id
        );

        Ok(row.into())
    }
}

/// Helper struct for booking row mapping
#[derive(Debug, FromRow)]
struct BookingRow {
    id: i32,
    user_id: i32,
    room_id: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            room_id: row.room_id,
            created_at: row.created_at.and_utc(),
            updated_at: row.updated_at.and_utc(),
        }
    }
}

/// Helper struct for booking + room row mapping
#[derive(Debug, FromRow)]
struct BookingWithRoomRow {
    id: i32,
    user_id: i32,
    room_id: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    room_name: String,
    room_capacity: i32,
    room_hotel_id: i32,
    room_created_at: NaiveDateTime,
    room_updated_at: NaiveDateTime,
}

impl From<BookingWithRoomRow> for BookingWithRoom {
    fn from(row: BookingWithRoomRow) -> Self {
        Self {
            booking: Booking {
                id: row.id,
                user_id: row.user_id,
                room_id: row.room_id,
                created_at: row.created_at.and_utc(),
                updated_at: row.updated_at.and_utc(),
            },
            room: Room {
                id: row.room_id,
                name: row.room_name,
                capacity: row.room_capacity,
                hotel_id: row.room_hotel_id,
                created_at: row.room_created_at.and_utc(),
                updated_at: row.room_updated_at.and_utc(),
            },
        }
    }
}
