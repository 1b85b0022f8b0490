//! API Module
//!
//! HTTP API layer for the server.
//! Each submodule handles endpoints for a specific domain.

pub mod admin;
pub mod booking;
pub mod error;
pub mod experience;
pub mod health;
pub mod news;
pub mod review;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::AuthConfig;

/// Shared router state: the connection pool and the admin auth config
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth: AuthConfig,
}

/// Create the main API router with all endpoints
pub fn create_router(pool: PgPool, auth: AuthConfig) -> Router {
    let state = AppState { pool, auth };

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Experience endpoints
        .route("/api/experiences", post(experience::create_experience))
        .route("/api/experiences", get(experience::list_experiences))
        .route("/api/experiences/{id}", get(experience::get_experience))
        .route("/api/experiences/{id}", put(experience::update_experience))
        .route("/api/experiences/{id}", delete(experience::delete_experience))
        // Booking endpoints
        .route("/api/bookings", post(booking::create_booking))
        .route("/api/bookings", get(booking::list_bookings))
        .route("/api/bookings/{id}", get(booking::get_booking))
        .route("/api/bookings/{id}/status", put(booking::set_booking_status))
        .route("/api/bookings/{id}", delete(booking::delete_booking))
        // Review endpoints
        .route("/api/reviews", post(review::create_review))
        .route("/api/reviews", get(review::list_reviews))
        .route("/api/reviews/{id}/approval", put(review::set_review_approval))
        .route("/api/reviews/{id}", delete(review::delete_review))
        // News endpoints
        .route("/api/news", post(news::create_article))
        .route("/api/news", get(news::list_articles))
        .route("/api/news/{id}", get(news::get_article))
        .route("/api/news/{id}", put(news::update_article))
        .route("/api/news/{id}", delete(news::delete_article))
        // Admin session endpoints
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/verify", get(admin::verify))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
