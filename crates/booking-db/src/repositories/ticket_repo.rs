//! Ticket repository implementation
//!
//! Provides PostgreSQL-backed ticket lookups joined with their ticket type.

use booking_core::{
    models::{Ticket, TicketStatus, TicketType},
    traits::TicketRepository,
    AppError, AppResult,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, instrument};

/// PostgreSQL implementation of TicketRepository
pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    /// Create a new ticket repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Parse ticket status from string; unknown values are never eligible
    fn parse_status(s: &str) -> TicketStatus {
        TicketStatus::from_str(s).unwrap_or(TicketStatus::Reserved)
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    #[instrument(skip(self))]
    async fn find_ticket_by_enrollment_id(&self, enrollment_id: i32) -> AppResult<Option<Ticket>> {
        debug!("Finding ticket by enrollment id: {}", enrollment_id);

        let result = sqlx::query_as::<sqlx::Postgres, TicketRow>(
            r#"
            SELECT
                t.id,
                t."ticketTypeId" AS ticket_type_id,
                t."enrollmentId" AS enrollment_id,
                t.status::text AS status,
                t."createdAt" AS created_at,
                t."updatedAt" AS updated_at,
                tt.name AS type_name,
                tt.price AS type_price,
                tt."isRemote" AS type_is_remote,
                tt."includesHotel" AS type_includes_hotel,
                tt."createdAt" AS type_created_at,
                tt."updatedAt" AS type_updated_at
            FROM "Ticket" t
            JOIN "TicketType" tt ON tt.id = t."ticketTypeId"
            WHERE t."enrollmentId" = $1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Database error finding ticket of enrollment {}: {}",
                enrollment_id, e
            );
            AppError::Database(format!("Failed to find ticket: {}", e))
        })?;

        Ok(result.map(Into::into))
    }
}

/// Helper struct for ticket + ticket type row mapping
#[derive(Debug, FromRow)]
struct TicketRow {
    id: i32,
    ticket_type_id: i32,
    enrollment_id: i32,
    status: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    type_name: String,
    type_price: i32,
    type_is_remote: bool,
    type_includes_hotel: bool,
    type_created_at: NaiveDateTime,
    type_updated_at: NaiveDateTime,
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Self {
            id: row.id,
            ticket_type_id: row.ticket_type_id,
            enrollment_id: row.enrollment_id,
            status: PgTicketRepository::parse_status(&row.status),
            created_at: row.created_at.and_utc(),
            updated_at: row.updated_at.and_utc(),
            ticket_type: TicketType {
                id: row.ticket_type_id,
                name: row.type_name,
                price: row.type_price,
                is_remote: row.type_is_remote,
                includes_hotel: row.type_includes_hotel,
                created_at: row.type_created_at.and_utc(),
                updated_at: row.type_updated_at.and_utc(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_parse_status() {
        assert_eq!(PgTicketRepository::parse_status("PAID"), TicketStatus::Paid);
        assert_eq!(
            PgTicketRepository::parse_status("RESERVED"),
            TicketStatus::Reserved
        );
        assert_eq!(
            PgTicketRepository::parse_status("invalid"),
            TicketStatus::Reserved
        );
    }

    #[test]
    fn test_ticket_row_conversion() {
        let ts = NaiveDateTime::default();
        let row = TicketRow {
            id: 10,
            ticket_type_id: 3,
            enrollment_id: 5,
            status: "PAID".to_string(),
            created_at: ts,
            updated_at: ts,
            type_name: "Presencial".to_string(),
            type_price: 250,
            type_is_remote: false,
            type_includes_hotel: true,
            type_created_at: ts,
            type_updated_at: ts,
        };

        let ticket = Ticket::from(row);
        assert_eq!(ticket.status, TicketStatus::Paid);
        assert_eq!(ticket.ticket_type.id, 3);
        assert!(ticket.allows_hotel_booking());
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_ticket_joined_with_type() {
        let pool = seed::connect().await.unwrap();
        let user = seed::create_user(&pool).await.unwrap();
        let enrollment_id = seed::create_enrollment_with_address(&pool, user.id)
            .await
            .unwrap();
        let type_id = seed::create_ticket_type(&pool, true, false).await.unwrap();
        let ticket_id = seed::create_ticket(&pool, enrollment_id, type_id, TicketStatus::Paid)
            .await
            .unwrap();

        let repo = PgTicketRepository::new(pool);
        let ticket = repo
            .find_ticket_by_enrollment_id(enrollment_id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(ticket.id, ticket_id);
        assert_eq!(ticket.status, TicketStatus::Paid);
        assert_eq!(ticket.ticket_type.id, type_id);
        assert!(ticket.ticket_type.is_remote);
        assert!(!ticket.ticket_type.includes_hotel);
        assert!(!ticket.allows_hotel_booking());
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_reserved_status_read_back() {
        let pool = seed::connect().await.unwrap();
        let user = seed::create_user(&pool).await.unwrap();
        let enrollment_id = seed::create_enrollment_with_address(&pool, user.id)
            .await
            .unwrap();
        let type_id = seed::create_ticket_type(&pool, false, true).await.unwrap();
        seed::create_ticket(&pool, enrollment_id, type_id, TicketStatus::Reserved)
            .await
            .unwrap();

        let ticket = PgTicketRepository::new(pool)
            .find_ticket_by_enrollment_id(enrollment_id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(ticket.status, TicketStatus::Reserved);
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_enrollment_without_ticket() {
        let pool = seed::connect().await.unwrap();
        let user = seed::create_user(&pool).await.unwrap();
        let enrollment_id = seed::create_enrollment_with_address(&pool, user.id)
            .await
            .unwrap();

        let ticket = PgTicketRepository::new(pool)
            .find_ticket_by_enrollment_id(enrollment_id)
            .await
            .unwrap();

        assert!(ticket.is_none());
    }
}
