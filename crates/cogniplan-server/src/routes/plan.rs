use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use jiff::civil::Date;
use serde::Deserialize;

use cogniplan_core::models::patient::PatientInput;
use cogniplan_core::models::plan::TreatmentPlanOutput;
use cogniplan_rules::create_treatment_plan;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PlanQuery {
    /// First day to search for an appointment; today when absent.
    from: Option<Date>,
}

/// Classify the patient and book their next appointment.
///
/// A patient that no rule covers gets the no-plan record with 422.
pub async fn create_plan(
    State(state): State<AppState>,
    query: Result<Query<PlanQuery>, QueryRejection>,
    payload: Result<Json<PatientInput>, JsonRejection>,
) -> Result<(StatusCode, Json<TreatmentPlanOutput>), ApiError> {
    let Query(query) = query?;
    let Json(patient) = payload?;

    let plan = {
        let mut scheduler = state.scheduler.lock().await;
        create_treatment_plan(&patient, &mut scheduler, query.from)?
    };

    let status = if plan.is_no_plan() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };
    Ok((status, Json(plan)))
}
