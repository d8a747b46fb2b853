use std::sync::LazyLock;

use cogniplan_core::models::level::{CaregiverAvailability, DementiaLevel};
use cogniplan_core::models::patient::ClinicalScores;
use serde::Serialize;

use crate::scoring::ScoreInterval;

/// One row of the rule table.
#[derive(Debug, Clone, Serialize)]
pub struct TreatmentRule {
    pub level: DementiaLevel,
    pub caregiver: CaregiverAvailability,
    pub cdr: ScoreInterval,
    pub mmse: ScoreInterval,
    /// Days between follow-up visits.
    pub visit_frequency: u32,
    pub recommendation: &'static [&'static str],
}

impl TreatmentRule {
    pub fn matches(&self, scores: ClinicalScores, caregiver: CaregiverAvailability) -> bool {
        self.caregiver == caregiver
            && self.cdr.contains(scores.cdr)
            && self.mmse.contains(scores.mmse)
    }
}

/// First rule whose intervals and caregiver value all match.
///
/// The MMSE bands leave gaps (e.g. 23.5), and an unrecognised caregiver value
/// matches nothing; both yield `None`.
pub fn classify(
    scores: ClinicalScores,
    caregiver: Option<CaregiverAvailability>,
) -> Option<&'static TreatmentRule> {
    let caregiver = caregiver?;
    rules().iter().find(|rule| rule.matches(scores, caregiver))
}

/// The rule table in evaluation order.
pub fn rules() -> &'static [TreatmentRule] {
    static RULES: LazyLock<Vec<TreatmentRule>> = LazyLock::new(|| {
        use CaregiverAvailability::{Available, Unavailable};
        use DementiaLevel::*;

        let bands = [
            (
                NonDemented,
                ScoreInterval::exactly(0.0),
                ScoreInterval::at_least(24.0),
                365,
            ),
            (
                VeryMildDemented,
                ScoreInterval::above_up_to(0.0, 0.5),
                ScoreInterval::closed(22.0, 23.0),
                180,
            ),
            (
                MildDemented,
                ScoreInterval::above_up_to(0.5, 1.0),
                ScoreInterval::closed(19.0, 21.0),
                90,
            ),
            (
                ModerateDemented,
                ScoreInterval::above_up_to(1.0, 2.0),
                ScoreInterval::closed(10.0, 18.0),
                60,
            ),
            (
                SevereDemented,
                ScoreInterval::above(2.0),
                ScoreInterval::below(10.0),
                30,
            ),
        ];

        bands
            .into_iter()
            .flat_map(|(level, cdr, mmse, visit_frequency)| {
                [Available, Unavailable].map(|caregiver| TreatmentRule {
                    level,
                    caregiver,
                    cdr,
                    mmse,
                    visit_frequency,
                    recommendation: recommendation(level, caregiver),
                })
            })
            .collect()
    });
    &RULES
}

fn recommendation(
    level: DementiaLevel,
    caregiver: CaregiverAvailability,
) -> &'static [&'static str] {
    use CaregiverAvailability::{Available, Unavailable};
    use DementiaLevel::*;

    match (level, caregiver) {
        (NonDemented, Available) => &[
            "1. Annual cognitive screenings using multiple tools (MMSE, MoCA).",
            "2. Mediterranean diet, regular aerobic exercise (150 min/week), cognitive stimulation.",
            "3. Manage vascular risk factors (hypertension, diabetes, cholesterol) and avoid smoking/excessive alcohol.",
            "4. Establish cognitive baseline and educate on early warning signs of cognitive decline.",
        ],
        (NonDemented, Unavailable) => &[
            "1. Annual cognitive screenings using multiple assessment tools (MMSE, MoCA).",
            "2. Suggest patient join cognitive stimulation groups and social activities.",
            "3. Optimize management of medical conditions that may affect cognition.",
            "4. Discuss advance care planning while decision-making capacity is intact.",
        ],
        (VeryMildDemented, Available) => &[
            "1. Implement structured cognitive exercises and memory training (20-30 min daily).",
            "2. Train caregivers in communication techniques and early dementia management.",
            "3. Consider cholinesterase inhibitors if symptoms progress.",
            "4. Schedule hearing/vision assessment and optimize sensory function.",
            "5. Maintain social engagement and meaningful activities with caregiver support.",
        ],
        (VeryMildDemented, Unavailable) => &[
            "1. Engage in community-based cognitive stimulation programs (2-3 times weekly).",
            "2. Connect with local dementia support services and caregiver resources.",
            "3. Implement memory aids and reminder systems in the home environment.",
            "4. Establish medication management system and evaluate transportation needs.",
            "5. Consider technological solutions for remote monitoring and support.",
        ],
        (MildDemented, Available) => &[
            "1. Initiate cholinesterase inhibitors (donepezil, rivastigmine, or galantamine).",
            "2. Implement comprehensive memory aids, calendars, and structured daily routines.",
            "3. Caregiver training on managing emerging behavioral symptoms and communication strategies.",
            "4. Home safety assessment and modifications to prevent falls and wandering.",
            "5. Begin discussions about advance directives and long-term care planning.",
        ],
        (MildDemented, Unavailable) => &[
            "1. Initiate medication therapy with close monitoring for adherence and side effects.",
            "2. Arrange visiting nurse or home care services (2-3 times weekly) for medication management.",
            "3. Connect with adult day programs specializing in dementia care.",
            "4. Install home monitoring systems and medication reminder technology.",
            "5. Evaluate capacity for independent living and explore supportive housing options.",
        ],
        (ModerateDemented, Available) => &[
            "1. Optimize pharmacological management: cholinesterase inhibitors and consider memantine.",
            "2. Implement non-pharmacological approaches for behavioral symptoms (redirection, routine).",
            "3. Caregiver training on managing activities of daily living and preventing caregiver burnout.",
            "4. Assess and treat co-morbid conditions that may worsen cognition or function.",
            "5. Evaluate need for assistive devices, home modifications, and respite care services.",
        ],
        (ModerateDemented, Unavailable) => &[
            "1. Arrange comprehensive home care services or consider assisted living placement.",
            "2. Implement medication management system with professional oversight.",
            "3. Establish guardianship or power of attorney if not already in place.",
            "4. Coordinate multidisciplinary care team (geriatrics, neurology, social work).",
            "5. Implement fall prevention strategies and regular nutrition assessment.",
        ],
        (SevereDemented, Available) => &[
            "1. Focus on comfort care and quality of life measures rather than cognitive enhancement.",
            "2. Provide caregiver training on late-stage dementia care, including feeding techniques.",
            "3. Address common complications: infection prevention, skin care, pain management.",
            "4. Consider palliative care consultation and discuss goals of care.",
            "5. Evaluate medication appropriateness and discontinue unnecessary treatments.",
        ],
        (SevereDemented, Unavailable) => &[
            "1. Facilitate placement in specialized memory care or skilled nursing facility.",
            "2. Implement palliative care approach focused on comfort and dignity.",
            "3. Establish clear advance directives regarding hospitalization and life-sustaining treatments.",
            "4. Create sensory stimulation program tailored to remaining abilities.",
            "5. Coordinate care conferences with facility staff and any involved family members.",
        ],
    }
}
