//! Enrollment repository implementation
//!
//! Loads an enrollment and its addresses in two queries.

use booking_core::{
    models::{Address, Enrollment},
    traits::EnrollmentRepository,
    AppError, AppResult,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, instrument};

/// PostgreSQL implementation of EnrollmentRepository
pub struct PgEnrollmentRepository {
    pool: PgPool,
}

impl PgEnrollmentRepository {
    /// Create a new enrollment repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_addresses(&self, enrollment_id: i32) -> AppResult<Vec<Address>> {
        let rows = sqlx::query_as::<sqlx::Postgres, AddressRow>(
            r#"
            SELECT
                id, cep, street, city, state, number, neighborhood,
                "addressDetail" AS address_detail,
                "enrollmentId" AS enrollment_id,
                "createdAt" AS created_at,
                "updatedAt" AS updated_at
            FROM "Address"
            WHERE "enrollmentId" = $1
            ORDER BY id
            "#,
        )
        .bind(enrollment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Database error finding addresses of enrollment {}: {}",
                enrollment_id, e
            );
            AppError::Database(format!("Failed to find addresses: {}", e))
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl EnrollmentRepository for PgEnrollmentRepository {
    #[instrument(skip(self))]
    async fn find_with_address_by_user_id(&self, user_id: i32) -> AppResult<Option<Enrollment>> {
        debug!("Finding enrollment by user id: {}", user_id);

        let row = sqlx::query_as::<sqlx::Postgres, EnrollmentRow>(
            r#"
            SELECT
                id, name, cpf, birthday, phone,
                "userId" AS user_id,
                "createdAt" AS created_at,
                "updatedAt" AS updated_at
            FROM "Enrollment"
            WHERE "userId" = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error finding enrollment of user {}: {}", user_id, e);
            AppError::Database(format!("Failed to find enrollment: {}", e))
        })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let addresses = self.find_addresses(row.id).await?;
        Ok(Some(row.into_enrollment(addresses)))
    }
}

/// Helper struct for enrollment row mapping
#[derive(Debug, FromRow)]
struct EnrollmentRow {
    id: i32,
    name: String,
    cpf: String,
    birthday: NaiveDateTime,
    phone: String,
    user_id: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl EnrollmentRow {
    fn into_enrollment(self, addresses: Vec<Address>) -> Enrollment {
        Enrollment {
            id: self.id,
            name: self.name,
            cpf: self.cpf,
            birthday: self.birthday.and_utc(),
            phone: self.phone,
            user_id: self.user_id,
            created_at: self.created_at.and_utc(),
            updated_at: self.updated_at.and_utc(),
            addresses,
        }
    }
}

/// Helper struct for address row mapping
#[derive(Debug, FromRow)]
struct AddressRow {
    id: i32,
    cep: String,
    street: String,
    city: String,
    state: String,
    number: String,
    neighborhood: String,
    address_detail: Option<String>,
    enrollment_id: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Self {
            id: row.id,
            cep: row.cep,
            street: row.street,
            city: row.city,
            state: row.state,
            number: row.number,
            neighborhood: row.neighborhood,
            address_detail: row.address_detail,
            enrollment_id: row.enrollment_id,
            created_at: row.created_at.and_utc(),
            updated_at: row.updated_at.and_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use booking_core::fixtures;

    #[test]
    fn test_enrollment_row_conversion() {
        let ts = NaiveDateTime::default();
        let row = EnrollmentRow {
            id: 4,
            name: "Maria".to_string(),
            cpf: "52998224725".to_string(),
            birthday: ts,
            phone: "(11) 98765-4321".to_string(),
            user_id: 9,
            created_at: ts,
            updated_at: ts,
        };

        let enrollment = row.into_enrollment(Vec::new());
        assert_eq!(enrollment.id, 4);
        assert_eq!(enrollment.user_id, 9);
        assert!(enrollment.addresses.is_empty());
        assert_eq!(enrollment.created_at, ts.and_utc());
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_enrollment_loaded_with_address() {
        let pool = seed::connect().await.unwrap();
        let user = seed::create_user(&pool).await.unwrap();
        let enrollment_id = seed::create_enrollment_with_address(&pool, user.id)
            .await
            .unwrap();

        let repo = PgEnrollmentRepository::new(pool);
        let enrollment = repo
            .find_with_address_by_user_id(user.id)
            .await
            .unwrap()
            .unwrap();

        let expected = fixtures::address(enrollment_id);
        assert_eq!(enrollment.id, enrollment_id);
        assert_eq!(enrollment.user_id, user.id);
        assert_eq!(enrollment.addresses.len(), 1);
        assert_eq!(enrollment.addresses[0].enrollment_id, enrollment_id);
        assert_eq!(enrollment.addresses[0].cep, expected.cep);
        assert_eq!(enrollment.addresses[0].address_detail, expected.address_detail);
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_user_without_enrollment() {
        let pool = seed::connect().await.unwrap();
        let user = seed::create_user(&pool).await.unwrap();

        let enrollment = PgEnrollmentRepository::new(pool)
            .find_with_address_by_user_id(user.id)
            .await
            .unwrap();

        assert!(enrollment.is_none());
    }
}
