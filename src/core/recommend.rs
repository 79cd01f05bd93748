use crate::core::ranking::rank;
use crate::core::reason::recommendation_reason;
use crate::core::scoring::{match_score, matched_symptom_names};
use crate::domain::model::{Doctor, Recommendation, Symptom};

/// Scores every doctor against the selection and returns the ranked list.
///
/// Doctors scoring 0 are left out entirely. Neither input is modified, and
/// the same inputs always produce the same output.
pub fn generate_recommendations(doctors: &[Doctor], symptoms: &[Symptom]) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for doctor in doctors {
        let score = match_score(doctor, symptoms);
        if score <= 0.0 {
            continue;
        }

        let matched_symptoms = matched_symptom_names(doctor, symptoms);
        let reason = recommendation_reason(doctor, &matched_symptoms, score);
        tracing::debug!(
            doctor_id = %doctor.id,
            score,
            matched = matched_symptoms.len(),
            "Doctor matched selection"
        );

        recommendations.push(Recommendation {
            doctor: doctor.clone(),
            match_score: score,
            matched_symptoms,
            reason,
        });
    }

    rank(&mut recommendations);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Severity;

    fn doctor(id: &str, specs: &[&str], experience: u32, rating: f64) -> Doctor {
        Doctor::new(
            id,
            "Test",
            id,
            specs.iter().map(|s| s.to_string()).collect(),
            experience,
            rating,
        )
    }

    fn symptom(name: &str, severity: Severity, related: &[&str]) -> Symptom {
        Symptom::new(
            name,
            name,
            severity,
            "recent",
            related.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_zero_scores_excluded() {
        let doctors = vec![
            doctor("retina", &["Retina Specialist"], 15, 4.9),
            doctor("glaucoma", &["Glaucoma Specialist"], 12, 4.8),
        ];
        let symptoms = vec![symptom("Night Blindness", Severity::Moderate, &["Retina Specialist"])];

        let recs = generate_recommendations(&doctors, &symptoms);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].doctor.id, "retina");
        assert_eq!(recs[0].matched_symptoms, vec!["Night Blindness"]);
        assert!(recs.iter().all(|r| r.match_score > 0.0));
    }

    #[test]
    fn test_empty_selection_yields_nothing() {
        let doctors = vec![doctor("retina", &["Retina Specialist"], 15, 4.9)];
        assert!(generate_recommendations(&doctors, &[]).is_empty());
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let doctors = vec![
            doctor("a", &["Cornea Specialist"], 3, 4.1),
            doctor("b", &["Cornea Specialist", "Glaucoma Specialist"], 18, 4.6),
            doctor("c", &["Glaucoma Specialist"], 11, 4.9),
        ];
        let symptoms = vec![
            symptom(
                "Halos Around Lights",
                Severity::Moderate,
                &["Glaucoma Specialist", "Cornea Specialist"],
            ),
            symptom("Red Eyes", Severity::Mild, &["Cornea Specialist"]),
        ];

        let forward = generate_recommendations(&doctors, &symptoms);
        let mut reversed_doctors = doctors.clone();
        reversed_doctors.reverse();
        let backward = generate_recommendations(&reversed_doctors, &symptoms);

        let ids = |recs: &[Recommendation]| {
            recs.iter().map(|r| r.doctor.id.clone()).collect::<Vec<_>>()
        };
        assert_eq!(ids(&forward), ids(&backward));
        assert_eq!(ids(&forward), vec!["b", "a", "c"]);
    }
}
