use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Severity tier assigned by the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DementiaLevel {
    NonDemented,
    VeryMildDemented,
    MildDemented,
    ModerateDemented,
    SevereDemented,
}

impl DementiaLevel {
    pub const ALL: [DementiaLevel; 5] = [
        DementiaLevel::NonDemented,
        DementiaLevel::VeryMildDemented,
        DementiaLevel::MildDemented,
        DementiaLevel::ModerateDemented,
        DementiaLevel::SevereDemented,
    ];

    /// Wire label, also used as the scheduler's priority tag.
    pub fn label(self) -> &'static str {
        match self {
            DementiaLevel::NonDemented => "NON_DEMENTED",
            DementiaLevel::VeryMildDemented => "VERY_MILD_DEMENTED",
            DementiaLevel::MildDemented => "MILD_DEMENTED",
            DementiaLevel::ModerateDemented => "MODERATE_DEMENTED",
            DementiaLevel::SevereDemented => "SEVERE_DEMENTED",
        }
    }
}

impl fmt::Display for DementiaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DementiaLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DementiaLevel::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or_else(|| CoreError::UnknownLevel(s.to_string()))
    }
}

/// Whether a caregiver is available to support the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaregiverAvailability {
    Available,
    #[serde(rename = "NONE")]
    Unavailable,
}

impl CaregiverAvailability {
    /// Parse the exact wire form. Anything else is unrecognised and simply
    /// matches no rule downstream.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AVAILABLE" => Some(CaregiverAvailability::Available),
            "NONE" => Some(CaregiverAvailability::Unavailable),
            _ => None,
        }
    }
}
