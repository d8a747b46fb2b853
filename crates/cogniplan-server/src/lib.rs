//! cogniplan-server
//!
//! HTTP surface over the treatment planner and the appointment scheduler.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router around `state`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .route("/rules", get(routes::rules::list_rules))
        .route("/plan", post(routes::plan::create_plan))
        .route("/next-slot", get(routes::availability::next_slot))
        .route("/report", get(routes::availability::availability_report))
        .route("/bookings", get(routes::availability::export_bookings))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
