use axum::Json;

use cogniplan_rules::{TreatmentRule, rules};

/// The rule table in evaluation order.
pub async fn list_rules() -> Json<&'static [TreatmentRule]> {
    Json(rules())
}
