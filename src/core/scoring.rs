//! Per-doctor match scoring.
//!
//! Every selected symptom is worth up to 100 points and the total is
//! normalised back to a 0-100 scale, so the score does not grow with the
//! number of symptoms submitted.

use crate::domain::model::{Doctor, Severity, Symptom};

const POINTS_PER_SYMPTOM: f64 = 100.0;
const BASE_MATCH_POINTS: u32 = 60;
const MAX_SYMPTOM_POINTS: u32 = 100;

/// Case-insensitive containment in either direction, so that
/// "Cornea Specialist" and "Cornea" match each other.
pub fn labels_match(specialization: &str, related: &str) -> bool {
    let specialization = specialization.to_lowercase();
    let related = related.to_lowercase();
    specialization.contains(&related) || related.contains(&specialization)
}

/// Whether any of the doctor's specializations relates to the symptom.
/// Empty label lists on either side never match.
pub fn has_specialization_match(doctor: &Doctor, symptom: &Symptom) -> bool {
    doctor.specializations.iter().any(|spec| {
        symptom
            .related_specializations
            .iter()
            .any(|related| labels_match(spec, related))
    })
}

pub fn severity_bonus(severity: Severity) -> u32 {
    match severity {
        Severity::Severe => 30,
        Severity::Moderate => 20,
        Severity::Mild => 10,
    }
}

pub fn experience_bonus(experience: u32) -> u32 {
    if experience >= 15 {
        10
    } else if experience >= 10 {
        5
    } else {
        0
    }
}

/// Points one symptom contributes for this doctor, in `0..=100`.
pub fn symptom_points(doctor: &Doctor, symptom: &Symptom) -> u32 {
    if !has_specialization_match(doctor, symptom) {
        return 0;
    }

    let points =
        BASE_MATCH_POINTS + severity_bonus(symptom.severity) + experience_bonus(doctor.experience);
    points.min(MAX_SYMPTOM_POINTS)
}

/// Normalised match score in `[0, 100]`; 0 for an empty selection.
pub fn match_score(doctor: &Doctor, symptoms: &[Symptom]) -> f64 {
    if symptoms.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    let mut max_possible = 0.0;
    for symptom in symptoms {
        max_possible += POINTS_PER_SYMPTOM;
        total += f64::from(symptom_points(doctor, symptom));
    }

    total / max_possible * 100.0
}

/// Names of the symptoms this doctor matches, in selection order.
pub fn matched_symptom_names(doctor: &Doctor, symptoms: &[Symptom]) -> Vec<String> {
    symptoms
        .iter()
        .filter(|symptom| has_specialization_match(doctor, symptom))
        .map(|symptom| symptom.name.clone())
        .collect()
}
