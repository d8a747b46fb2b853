use cogniplan_core::models::patient::PatientInput;
use cogniplan_core::models::plan::TreatmentPlanOutput;
use cogniplan_schedule::AvailabilityScheduler;
use jiff::civil::Date;

use crate::error::RulesError;
use crate::rules::classify;
use crate::scoring::validate_patient;

/// Validate, classify and book.
///
/// Invalid input is returned as an error without touching the scheduler. A
/// valid patient that no rule matches yields [`TreatmentPlanOutput::no_plan`],
/// again without booking. Otherwise exactly one slot is requested, tagged with
/// the matched level; running out of slots still produces a plan whose
/// `next_appointment` carries the no-availability text.
pub fn create_treatment_plan(
    patient: &PatientInput,
    scheduler: &mut AvailabilityScheduler,
    from: Option<Date>,
) -> Result<TreatmentPlanOutput, RulesError> {
    let validated = validate_patient(patient)
        .inspect_err(|e| tracing::info!(error = %e, "rejected patient input"))?;
    tracing::info!(
        cdr = validated.scores.cdr,
        mmse = validated.scores.mmse,
        caregiver = %patient.caregiver_availability,
        "classifying patient"
    );

    let Some(rule) = classify(validated.scores, validated.caregiver) else {
        tracing::warn!(
            cdr = validated.scores.cdr,
            mmse = validated.scores.mmse,
            caregiver = %patient.caregiver_availability,
            "no treatment rule matched"
        );
        return Ok(TreatmentPlanOutput::no_plan());
    };

    let slot = scheduler.find_next_available_slot(rule.level.label(), from);
    tracing::info!(
        level = %rule.level,
        visit_frequency = rule.visit_frequency,
        booked = slot.is_booked(),
        "treatment plan generated"
    );

    Ok(TreatmentPlanOutput {
        first_name: Some(validated.first_name),
        last_name: Some(validated.last_name),
        dementia_level: Some(rule.level),
        visit_frequency: Some(rule.visit_frequency),
        treatment_recommendation: Some(rule.recommendation.iter().map(|s| s.to_string()).collect()),
        next_appointment: Some(slot.full_datetime()),
        error: None,
    })
}
