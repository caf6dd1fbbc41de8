//! Hotel Booking Server
//!
//! Lets enrolled users with a paid, in-person, hotel-inclusive ticket book a
//! hotel room, enforcing room capacity.

use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpResponse, HttpServer};
use booking_api::configure_booking;
use booking_auth::JwtService;
use booking_core::{traits::BookingService, AppConfig};
use booking_db::create_pool;
use booking_services::PgBookingService;
use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "booking-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Configure API routes
fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            // Health check
            .route("/health", web::get().to(health_check))
            // Hotel room booking
            .configure(configure_booking),
    );
}

/// Initialize tracing/logging
fn init_tracing() {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "booking_server={lvl},booking_api={lvl},booking_services={lvl},booking_db={lvl},booking_auth={lvl},actix_web=info,sqlx=warn",
            lvl = log_level
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    init_tracing();

    info!("Starting Hotel Booking Server v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Connecting to database...");
    let pool = create_pool(&config.database).await.map_err(|e| {
        error!("Failed to create database pool: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    info!(
        "Database connection established with {} max connections",
        config.database.max_connections
    );

    let booking_service: Arc<dyn BookingService> = Arc::new(PgBookingService::from_pool(pool));
    let jwt_service = Arc::new(JwtService::new(&config.auth.jwt_secret));

    let cors_origins = config.cors_origins();
    let bind_addr = config.server_addr();
    let workers = config.server.workers;
    let timeout = Duration::from_secs(config.server.timeout_secs);

    info!(
        "Starting HTTP server on {} with {} workers",
        bind_addr, workers
    );

    HttpServer::new(move || {
        let origins = cors_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                origin
                    .to_str()
                    .map(|o| origins.iter().any(|allowed| allowed == o))
                    .unwrap_or(false)
            })
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
                header::COOKIE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(booking_service.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            // Middleware
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            // Configure routes
            .configure(configure_routes)
    })
    .workers(workers)
    .client_request_timeout(timeout)
    .bind(&bind_addr)?
    .run()
    .await
}
