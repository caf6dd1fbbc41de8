//! Database seeding for tests
//!
//! Inserts rows into the real schema so repository and service tests can run
//! against PostgreSQL. Values come from `booking_core::fixtures`; unique
//! columns (user email, enrollment CPF) get a per-call suffix so seeded rows
//! never collide across tests or runs. Nothing is cleaned up.
//!
//! Enabled in this crate's tests and, for other crates, by the `testing`
//! feature. Tests using it are `#[ignore]` and read `DATABASE_URL`.

use crate::pool::create_pool;
use booking_core::{
    config::DatabaseConfig,
    fixtures,
    models::{TicketStatus, User},
    AppError, AppResult,
};
use chrono::Utc;
use sqlx::PgPool;
use std::sync::atomic::{AtomicU32, Ordering};

/// Capacity of rooms created by [`create_room_with_hotel_id`]
pub const SEEDED_ROOM_CAPACITY: i32 = 3;

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Digits unique to this call: process id, clock and a counter
fn unique_suffix() -> String {
    format!(
        "{}{}{}",
        std::process::id(),
        Utc::now().timestamp_micros(),
        SEQUENCE.fetch_add(1, Ordering::Relaxed)
    )
}

fn seed_error(table: &str) -> impl FnOnce(sqlx::Error) -> AppError + '_ {
    move |e| AppError::Database(format!("Failed to seed {}: {}", table, e))
}

/// Small pool on `DATABASE_URL`, defaulting to a local `booking` database
pub async fn connect() -> AppResult<PgPool> {
    let config = DatabaseConfig {
        url: std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgresql://localhost/booking".to_string()),
        max_connections: 2,
        min_connections: 1,
        acquire_timeout_secs: 5,
        idle_timeout_secs: 60,
    };

    create_pool(&config).await
}

/// Insert a user with a unique email
pub async fn create_user(pool: &PgPool) -> AppResult<User> {
    let template = fixtures::user();
    let email = format!("{}.{}", unique_suffix(), template.email);

    let (id, created_at, updated_at): (i32, chrono::NaiveDateTime, chrono::NaiveDateTime) =
        sqlx::query_as(
            r#"
            INSERT INTO "User" (email, password, "updatedAt")
            VALUES ($1, $2, NOW())
            RETURNING id, "createdAt", "updatedAt"
            "#,
        )
        .bind(&email)
        .bind(&template.password_hash)
        .fetch_one(pool)
        .await
        .map_err(seed_error("User"))?;

    Ok(User {
        id,
        email,
        password_hash: template.password_hash,
        created_at: created_at.and_utc(),
        updated_at: updated_at.and_utc(),
    })
}

/// Insert an enrollment for `user_id` with one address, returning its id
pub async fn create_enrollment_with_address(pool: &PgPool, user_id: i32) -> AppResult<i32> {
    let enrollment = fixtures::enrollment();

    let enrollment_id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO "Enrollment" (name, cpf, birthday, phone, "userId", "updatedAt")
        VALUES ($1, $2, $3, $4, $5, NOW())
        RETURNING id
        "#,
    )
    .bind(&enrollment.name)
    .bind(unique_suffix())
    .bind(enrollment.birthday.naive_utc())
    .bind(&enrollment.phone)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(seed_error("Enrollment"))?;

    let address = fixtures::address(enrollment_id);

    sqlx::query(
        r#"
        INSERT INTO "Address"
            (cep, street, city, state, number, neighborhood, "addressDetail", "enrollmentId", "updatedAt")
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
        "#,
    )
    .bind(&address.cep)
    .bind(&address.street)
    .bind(&address.city)
    .bind(&address.state)
    .bind(&address.number)
    .bind(&address.neighborhood)
    .bind(&address.address_detail)
    .bind(enrollment_id)
    .execute(pool)
    .await
    .map_err(seed_error("Address"))?;

    Ok(enrollment_id)
}

/// Insert a ticket type with the given flags, returning its id
pub async fn create_ticket_type(
    pool: &PgPool,
    is_remote: bool,
    includes_hotel: bool,
) -> AppResult<i32> {
    let template = fixtures::ticket_type();

    sqlx::query_scalar(
        r#"
        INSERT INTO "TicketType" (name, price, "isRemote", "includesHotel", "updatedAt")
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING id
        "#,
    )
    .bind(&template.name)
    .bind(template.price)
    .bind(is_remote)
    .bind(includes_hotel)
    .fetch_one(pool)
    .await
    .map_err(seed_error("TicketType"))
}

/// Insert a ticket for `enrollment_id`, returning its id
pub async fn create_ticket(
    pool: &PgPool,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: TicketStatus,
) -> AppResult<i32> {
    sqlx::query_scalar(
        r#"
        INSERT INTO "Ticket" ("ticketTypeId", "enrollmentId", status, "updatedAt")
        VALUES ($1, $2, $3::"TicketStatus", NOW())
        RETURNING id
        "#,
    )
    .bind(ticket_type_id)
    .bind(enrollment_id)
    .bind(status.to_string())
    .fetch_one(pool)
    .await
    .map_err(seed_error("Ticket"))
}

/// Insert a user holding a paid, in-person, hotel-inclusive ticket
pub async fn create_eligible_user(pool: &PgPool) -> AppResult<User> {
    let user = create_user(pool).await?;
    let enrollment_id = create_enrollment_with_address(pool, user.id).await?;
    let ticket_type_id = create_ticket_type(pool, false, true).await?;
    create_ticket(pool, enrollment_id, ticket_type_id, TicketStatus::Paid).await?;

    Ok(user)
}

/// Insert a hotel, returning its id
pub async fn create_hotel(pool: &PgPool) -> AppResult<i32> {
    let hotel = fixtures::hotel();

    sqlx::query_scalar(
        r#"
        INSERT INTO "Hotel" (name, image, "updatedAt")
        VALUES ($1, $2, NOW())
        RETURNING id
        "#,
    )
    .bind(&hotel.name)
    .bind(&hotel.image)
    .fetch_one(pool)
    .await
    .map_err(seed_error("Hotel"))
}

/// Insert a room of [`SEEDED_ROOM_CAPACITY`] in `hotel_id`, returning its id
pub async fn create_room_with_hotel_id(pool: &PgPool, hotel_id: i32) -> AppResult<i32> {
    sqlx::query_scalar(
        r#"
        INSERT INTO "Room" (name, capacity, "hotelId", "updatedAt")
        VALUES ('1020', $1, $2, NOW())
        RETURNING id
        "#,
    )
    .bind(SEEDED_ROOM_CAPACITY)
    .bind(hotel_id)
    .fetch_one(pool)
    .await
    .map_err(seed_error("Room"))
}

/// Insert a booking directly, bypassing every check, returning its id
pub async fn create_booking(pool: &PgPool, user_id: i32, room_id: i32) -> AppResult<i32> {
    sqlx::query_scalar(
        r#"
        INSERT INTO "Booking" ("userId", "roomId", "updatedAt")
        VALUES ($1, $2, NOW())
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(room_id)
    .fetch_one(pool)
    .await
    .map_err(seed_error("Booking"))
}

/// Fill `room_id` with `count` bookings, each by a fresh user
pub async fn fill_room(pool: &PgPool, room_id: i32, count: usize) -> AppResult<Vec<i32>> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let user = create_user(pool).await?;
        ids.push(create_booking(pool, user.id, room_id).await?);
    }
    Ok(ids)
}
