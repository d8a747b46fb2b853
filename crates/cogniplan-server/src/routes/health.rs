use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
}

#[derive(Serialize)]
pub struct Welcome {
    message: &'static str,
    version: &'static str,
    endpoints: [&'static str; 5],
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

pub async fn root() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to Dementia Treatment Planner API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ["/plan", "/next-slot", "/report", "/bookings", "/rules"],
    })
}
