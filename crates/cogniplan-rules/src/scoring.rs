use std::fmt;
use std::ops::{Bound, RangeBounds};

use cogniplan_core::models::level::CaregiverAvailability;
use cogniplan_core::models::patient::{ClinicalScores, PatientInput};
use serde::{Serialize, Serializer};

use crate::error::RulesError;

/// An interval over a score, each end open, closed or unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInterval {
    pub lower: Bound<f64>,
    pub upper: Bound<f64>,
}

impl ScoreInterval {
    /// `[value, value]`
    pub const fn exactly(value: f64) -> Self {
        Self {
            lower: Bound::Included(value),
            upper: Bound::Included(value),
        }
    }

    /// `[min, max]`
    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            lower: Bound::Included(min),
            upper: Bound::Included(max),
        }
    }

    /// `(min, max]`
    pub const fn above_up_to(min: f64, max: f64) -> Self {
        Self {
            lower: Bound::Excluded(min),
            upper: Bound::Included(max),
        }
    }

    /// `[min, ∞)`
    pub const fn at_least(min: f64) -> Self {
        Self {
            lower: Bound::Included(min),
            upper: Bound::Unbounded,
        }
    }

    /// `(min, ∞)`
    pub const fn above(min: f64) -> Self {
        Self {
            lower: Bound::Excluded(min),
            upper: Bound::Unbounded,
        }
    }

    /// `(-∞, max)`
    pub const fn below(max: f64) -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Excluded(max),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.lower, self.upper).contains(&value)
    }
}

impl fmt::Display for ScoreInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Bound::Included(v) => write!(f, "[{v}")?,
            Bound::Excluded(v) => write!(f, "({v}")?,
            Bound::Unbounded => f.write_str("(-inf")?,
        }
        f.write_str(", ")?;
        match self.upper {
            Bound::Included(v) => write!(f, "{v}]"),
            Bound::Excluded(v) => write!(f, "{v})"),
            Bound::Unbounded => f.write_str("inf)"),
        }
    }
}

impl Serialize for ScoreInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepted range of each input field.
const CDR_RANGE: ScoreInterval = ScoreInterval::closed(0.0, 3.0);
const MMSE_RANGE: ScoreInterval = ScoreInterval::above_up_to(0.0, 30.0);
const NAME_CHARS: std::ops::RangeInclusive<usize> = 2..=50;
const MAX_AGE: u32 = 120;
const MAX_NOTES_CHARS: usize = 500;

/// Patient input that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPatient {
    pub first_name: String,
    pub last_name: String,
    pub scores: ClinicalScores,
    /// `None` when the submitted value is not a recognised availability.
    pub caregiver: Option<CaregiverAvailability>,
}

/// Check a submission against the accepted field ranges.
pub fn validate_patient(input: &PatientInput) -> Result<ValidatedPatient, RulesError> {
    let (Some(cdr), Some(mmse)) = (input.cdr_score, input.mmse_score) else {
        return Err(RulesError::MissingScores);
    };

    let first_name = validate_name("firstName", &input.first_name)?;
    let last_name = validate_name("lastName", &input.last_name)?;
    check_score("cdrScore", cdr, CDR_RANGE)?;
    check_score("mmseScore", mmse, MMSE_RANGE)?;

    if let Some(age) = input.age
        && (age == 0 || age > MAX_AGE)
    {
        return Err(RulesError::InvalidField {
            field: "age",
            message: format!("{age} is outside (0, {MAX_AGE}]"),
        });
    }
    if let Some(notes) = &input.additional_notes
        && notes.chars().count() > MAX_NOTES_CHARS
    {
        return Err(RulesError::InvalidField {
            field: "additionalNotes",
            message: format!("longer than {MAX_NOTES_CHARS} characters"),
        });
    }

    Ok(ValidatedPatient {
        first_name,
        last_name,
        scores: ClinicalScores { cdr, mmse },
        caregiver: CaregiverAvailability::parse(&input.caregiver_availability),
    })
}

fn validate_name(field: &'static str, raw: &str) -> Result<String, RulesError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(RulesError::InvalidField {
            field,
            message: "Name cannot be empty".to_string(),
        });
    }
    let len = name.chars().count();
    if !NAME_CHARS.contains(&len) {
        return Err(RulesError::InvalidField {
            field,
            message: format!(
                "must be {}-{} characters, got {len}",
                NAME_CHARS.start(),
                NAME_CHARS.end()
            ),
        });
    }
    Ok(name.to_string())
}

fn check_score(field: &'static str, value: f64, range: ScoreInterval) -> Result<(), RulesError> {
    if value.is_finite() && range.contains(value) {
        Ok(())
    } else {
        Err(RulesError::InvalidField {
            field,
            message: format!("{value} is outside {range}"),
        })
    }
}
