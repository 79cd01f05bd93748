use crate::domain::model::Doctor;

pub const EXCELLENT_MATCH_THRESHOLD: f64 = 80.0;
pub const GOOD_MATCH_THRESHOLD: f64 = 60.0;

/// Justification shown next to a recommendation. The tier depends only on
/// the score: >= 80 names specialization, experience and matched symptoms,
/// >= 60 names the specialization, anything lower is generic.
pub fn recommendation_reason(
    doctor: &Doctor,
    matched_symptoms: &[String],
    match_score: f64,
) -> String {
    let name = doctor.display_name();
    let specialization = doctor.primary_specialization().unwrap_or("eye care");

    if match_score >= EXCELLENT_MATCH_THRESHOLD {
        format!(
            "Excellent match! {} is a {} {} who specializes in treating {}.",
            name,
            doctor.experience_level(),
            specialization,
            matched_symptoms.join(", ").to_lowercase()
        )
    } else if match_score >= GOOD_MATCH_THRESHOLD {
        format!(
            "Good match. {}'s expertise in {} makes them well-suited for your symptoms.",
            name, specialization
        )
    } else {
        format!("{} has relevant experience that may help with your condition.", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patel() -> Doctor {
        Doctor::new(
            "4",
            "Raj",
            "Patel",
            vec!["Neuro-Ophthalmology".into(), "Strabismus Specialist".into()],
            18,
            4.9,
        )
    }

    #[test]
    fn test_excellent_tier_lists_symptoms() {
        let matched = vec!["Double Vision".to_string(), "Eye Strain".to_string()];
        let reason = recommendation_reason(&patel(), &matched, 80.0);
        assert_eq!(
            reason,
            "Excellent match! Dr. Patel is a highly experienced Neuro-Ophthalmology who specializes in treating double vision, eye strain."
        );
    }

    #[test]
    fn test_good_tier_names_primary_specialization_only() {
        let matched = vec!["Double Vision".to_string()];
        let reason = recommendation_reason(&patel(), &matched, 79.9);
        assert!(reason.starts_with("Good match."));
        assert!(reason.contains("Neuro-Ophthalmology"));
        assert!(!reason.contains("double vision"));
    }

    #[test]
    fn test_generic_tier_below_sixty() {
        let reason = recommendation_reason(&patel(), &[], 45.0);
        assert_eq!(
            reason,
            "Dr. Patel has relevant experience that may help with your condition."
        );
    }
}
