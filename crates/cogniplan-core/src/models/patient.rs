use serde::{Deserialize, Serialize};

/// Patient data as submitted by a client.
///
/// Scores are optional at this layer so that a missing score surfaces as an
/// input error from the planner instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInput {
    #[serde(default)]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub cdr_score: Option<f64>,
    #[serde(default)]
    pub mmse_score: Option<f64>,
    #[serde(default)]
    pub additional_notes: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub caregiver_availability: String,
}

/// The two clinical scores the rule table reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClinicalScores {
    /// Clinical Dementia Rating, 0–3.
    pub cdr: f64,
    /// Mini-Mental State Examination, 0–30.
    pub mmse: f64,
}
