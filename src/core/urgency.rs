use crate::domain::model::{Severity, Symptom, UrgencyLevel};

/// Symptom names that always escalate to [`UrgencyLevel::High`].
/// Matched exactly, case-sensitive.
pub const VISION_THREATENING_SYMPTOMS: [&str; 3] =
    ["Flashing Lights", "Double Vision", "Sudden Vision Loss"];

const MEDIUM_SYMPTOM_COUNT: usize = 3;

/// Urgency of the whole selection, independent of doctor matching.
///
/// Rules are checked in priority order: high, then medium, then low.
pub fn emergency_level(symptoms: &[Symptom]) -> UrgencyLevel {
    let has_severe = symptoms.iter().any(|s| s.severity == Severity::Severe);
    let has_sudden_onset = symptoms.iter().any(Symptom::is_sudden);
    let has_vision_threat = symptoms
        .iter()
        .any(|s| VISION_THREATENING_SYMPTOMS.contains(&s.name.as_str()));

    if (has_severe && has_sudden_onset) || has_vision_threat {
        UrgencyLevel::High
    } else if has_severe || symptoms.len() >= MEDIUM_SYMPTOM_COUNT {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    }
}
