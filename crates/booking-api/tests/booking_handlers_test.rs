//! Integration tests for the booking API handlers
//!
//! Runs the handlers inside an actix test service with a mocked
//! `BookingService` and real JWT validation.

use actix_web::{
    dev::ServiceResponse,
    http::{header, StatusCode},
    test, web, App,
};
use booking_api::configure_booking;
use booking_auth::{Claims, JwtService};
use booking_core::fixtures;
use booking_core::traits::{BookingService, MockBookingService};
use booking_core::AppError;
use mockall::predicate::eq;
use serde_json::{json, Value};
use std::sync::Arc;

const SECRET: &str = "test-secret";

fn jwt_service() -> Arc<JwtService> {
    Arc::new(JwtService::new(SECRET))
}

fn token(user_id: i32, ttl_secs: i64) -> String {
    jwt_service()
        .create_token(&Claims::new(user_id, "guest@example.com", ttl_secs))
        .unwrap()
}

fn bearer(user_id: i32) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token(user_id, 3600)))
}

async fn call(service: MockBookingService, req: test::TestRequest) -> ServiceResponse {
    let service: Arc<dyn BookingService> = Arc::new(service);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(web::Data::new(jwt_service()))
            .service(web::scope("/api/v1").configure(configure_booking)),
    )
    .await;

    test::call_service(&app, req.to_request()).await
}

// ==================== Authentication ====================

#[actix_web::test]
async fn test_missing_token_is_unauthorized() {
    let mut service = MockBookingService::new();
    service.expect_get_booking().never();

    let resp = call(service, test::TestRequest::get().uri("/api/v1/booking")).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_expired_token_is_unauthorized() {
    let mut service = MockBookingService::new();
    service.expect_booking_room_by_id().never();

    let expired = token(1, -600);

    let resp = call(
        service,
        test::TestRequest::post()
            .uri("/api/v1/booking")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", expired)))
            .set_json(json!({ "room_id": 1 })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let token = JwtService::new("another-secret")
        .create_token(&Claims::new(1, "guest@example.com", 3600))
        .unwrap();

    let resp = call(
        MockBookingService::new(),
        test::TestRequest::get()
            .uri("/api/v1/booking")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token))),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ==================== GET /booking ====================

#[actix_web::test]
async fn test_get_booking_returns_booking_with_room() {
    let mut service = MockBookingService::new();
    service
        .expect_get_booking()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(fixtures::booking_with_room()));

    let resp = call(
        service,
        test::TestRequest::get()
            .uri("/api/v1/booking")
            .insert_header(bearer(1)),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["room"]["id"], 1);
    assert_eq!(body["room"]["capacity"], 2);
    assert_eq!(body["room"]["hotel_id"], 1);
}

#[actix_web::test]
async fn test_get_booking_without_record_is_not_found() {
    let mut service = MockBookingService::new();
    service
        .expect_get_booking()
        .with(eq(2))
        .returning(|user_id| Err(AppError::NotFound(format!("No booking for user {}", user_id))));

    let resp = call(
        service,
        test::TestRequest::get()
            .uri("/api/v1/booking")
            .insert_header(bearer(2)),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["status"], 404);
}

#[actix_web::test]
async fn test_token_cookie_is_accepted() {
    let mut service = MockBookingService::new();
    service
        .expect_get_booking()
        .with(eq(5))
        .returning(|user_id| {
            Ok(booking_core::models::BookingWithRoom {
                booking: fixtures::booking(user_id, 1),
                room: fixtures::room(),
            })
        });


    let resp = call(
        service,
        test::TestRequest::get()
            .uri("/api/v1/booking")
            .cookie(actix_web::cookie::Cookie::new("token", token(5, 3600))),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
}

// ==================== POST /booking ====================

#[actix_web::test]
async fn test_create_booking_returns_created() {
    let mut service = MockBookingService::new();
    service
        .expect_booking_room_by_id()
        .with(eq(1), eq(3))
        .times(1)
        .returning(|user_id, room_id| {
            Ok(booking_core::models::Booking {
                id: 17,
                ..fixtures::booking(user_id, room_id)
            })
        });

    let resp = call(
        service,
        test::TestRequest::post()
            .uri("/api/v1/booking")
            .insert_header(bearer(1))
            .set_json(json!({ "room_id": 3 })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["booking_id"], 17);
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn test_create_booking_cannot_booking_is_forbidden() {
    let mut service = MockBookingService::new();
    service
        .expect_booking_room_by_id()
        .returning(|_, _| Err(AppError::CannotBooking));

    let resp = call(
        service,
        test::TestRequest::post()
            .uri("/api/v1/booking")
            .insert_header(bearer(1))
            .set_json(json!({ "room_id": 1 })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "cannot_booking");
    assert_eq!(body["message"], "Cannot booking this room! Overcapacity!");
}

#[actix_web::test]
async fn test_create_booking_unknown_room_is_not_found() {
    let mut service = MockBookingService::new();
    service
        .expect_booking_room_by_id()
        .returning(|_, room_id| Err(AppError::NotFound(format!("Room {} not found", room_id))));

    let resp = call(
        service,
        test::TestRequest::post()
            .uri("/api/v1/booking")
            .insert_header(bearer(1))
            .set_json(json!({ "room_id": 999 })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_create_booking_non_positive_room_is_bad_request() {
    for room_id in [0, -1] {
        let mut service = MockBookingService::new();
        service.expect_booking_room_by_id().never();

        let resp = call(
            service,
            test::TestRequest::post()
                .uri("/api/v1/booking")
                .insert_header(bearer(1))
                .set_json(json!({ "room_id": room_id })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "bad_request");
    }
}

#[actix_web::test]
async fn test_create_booking_malformed_body_is_bad_request() {
    for payload in [json!({}), json!({ "room_id": "abc" })] {
        let mut service = MockBookingService::new();
        service.expect_booking_room_by_id().never();

        let resp = call(
            service,
            test::TestRequest::post()
                .uri("/api/v1/booking")
                .insert_header(bearer(1))
                .set_json(payload),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn test_create_booking_database_failure_is_internal_error() {
    let mut service = MockBookingService::new();
    service
        .expect_booking_room_by_id()
        .returning(|_, _| Err(AppError::Database("connection refused".to_string())));

    let resp = call(
        service,
        test::TestRequest::post()
            .uri("/api/v1/booking")
            .insert_header(bearer(1))
            .set_json(json!({ "room_id": 1 })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
