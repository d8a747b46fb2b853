use serde::{Deserialize, Serialize};

use super::level::DementiaLevel;

pub const NO_PLAN_GENERATED: &str = "No treatment plan generated";

/// Treatment plan returned to the caller.
///
/// Either fully populated with `error == None`, or the explicit no-plan
/// record where every other field is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentPlanOutput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dementia_level: Option<DementiaLevel>,
    pub visit_frequency: Option<u32>,
    pub treatment_recommendation: Option<Vec<String>>,
    pub next_appointment: Option<String>,
    pub error: Option<String>,
}

impl TreatmentPlanOutput {
    pub fn no_plan() -> Self {
        Self {
            first_name: None,
            last_name: None,
            dementia_level: None,
            visit_frequency: None,
            treatment_recommendation: None,
            next_appointment: None,
            error: Some(NO_PLAN_GENERATED.to_string()),
        }
    }

    pub fn is_no_plan(&self) -> bool {
        self.error.is_some()
    }
}
