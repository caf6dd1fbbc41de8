//! Room repository implementation

use booking_core::{models::Room, traits::RoomRepository, AppError, AppResult};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, instrument};

/// PostgreSQL implementation of RoomRepository
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    /// Create a new room repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Room>> {
        debug!("Finding room by id: {}", id);

        let result = sqlx::query_as::<sqlx::Postgres, RoomRow>(
            r#"
            SELECT
                id, name, capacity,
                "hotelId" AS hotel_id,
                "createdAt" AS created_at,
                "updatedAt" AS updated_at
            FROM "Room"
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error finding room {}: {}", id, e);
            AppError::Database(format!("Failed to find room: {}", e))
        })?;

        Ok(result.map(Into::into))
    }
}

/// Helper struct for room row mapping
#[derive(Debug, FromRow)]
struct RoomRow {
    id: i32,
    name: String,
    capacity: i32,
    hotel_id: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            capacity: row.capacity,
            hotel_id: row.hotel_id,
            created_at: row.created_at.and_utc(),
            updated_at: row.updated_at.and_utc(),
        }
    }
}
