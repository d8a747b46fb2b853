use std::collections::BTreeMap;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use jiff::civil::Date;
use serde::Deserialize;

use cogniplan_core::models::weekday::Weekday;
use cogniplan_schedule::{DayAvailability, NextSlot};

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_PRIORITY: &str = "NORMAL";

#[derive(Debug, Deserialize)]
pub struct NextSlotQuery {
    dementia_level: Option<String>,
    from: Option<Date>,
}

pub async fn next_slot(
    State(state): State<AppState>,
    query: Result<Query<NextSlotQuery>, QueryRejection>,
) -> Result<Json<NextSlot>, ApiError> {
    let Query(query) = query?;
    let priority = query.dementia_level.as_deref().unwrap_or(DEFAULT_PRIORITY);

    let slot = state
        .scheduler
        .lock()
        .await
        .find_next_available_slot(priority, query.from);
    Ok(Json(slot))
}

pub async fn availability_report(
    State(state): State<AppState>,
) -> Json<BTreeMap<Weekday, DayAvailability>> {
    Json(state.scheduler.lock().await.availability_report())
}

pub async fn export_bookings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let body = state.scheduler.lock().await.export_bookings()?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
