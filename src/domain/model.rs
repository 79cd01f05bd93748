use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity reported by the patient for a single symptom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    /// 解析使用者輸入的嚴重程度 (不分大小寫)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "mild" => Some(Severity::Mild),
            "moderate" => Some(Severity::Moderate),
            "severe" => Some(Severity::Severe),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Ordered; the first entry is the doctor's primary specialization.
    pub specializations: Vec<String>,
    /// Years in practice.
    pub experience: u32,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub availability: Vec<TimeSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultation_fee: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl Doctor {
    /// Minimal doctor record; the optional profile fields stay empty.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        specializations: Vec<String>,
        experience: u32,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            specializations,
            experience,
            rating,
            email: None,
            phone: None,
            qualifications: Vec::new(),
            availability: Vec::new(),
            consultation_fee: None,
            bio: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn display_name(&self) -> String {
        format!("Dr. {}", self.last_name)
    }

    pub fn primary_specialization(&self) -> Option<&str> {
        self.specializations.first().map(String::as_str)
    }

    pub fn experience_level(&self) -> &'static str {
        if self.experience >= 15 {
            "highly experienced"
        } else if self.experience >= 10 {
            "experienced"
        } else {
            "skilled"
        }
    }

    pub fn available_days(&self) -> Vec<u8> {
        self.availability
            .iter()
            .filter(|slot| slot.is_available)
            .map(|slot| slot.day_of_week)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub severity: Severity,
    /// Onset tag such as "recent", "chronic" or "sudden".
    pub duration: String,
    pub related_specializations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Symptom {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        severity: Severity,
        duration: impl Into<String>,
        related_specializations: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            severity,
            duration: duration.into(),
            related_specializations,
            description: None,
        }
    }

    pub fn with_severity(&self, severity: Severity) -> Self {
        Self {
            severity,
            ..self.clone()
        }
    }

    pub fn is_sudden(&self) -> bool {
        self.duration == "sudden"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub doctor: Doctor,
    pub match_score: f64,
    pub matched_symptoms: Vec<String>,
    pub reason: String,
}

impl Recommendation {
    /// Score rounded for display as a percentage.
    pub fn score_percent(&self) -> u32 {
        self.match_score.round() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
        }
    }

    /// Patient-facing guidance for this urgency level.
    pub fn advice(&self) -> &'static str {
        match self {
            UrgencyLevel::High => "Urgent care recommended - seek immediate medical attention",
            UrgencyLevel::Medium => "Schedule an appointment soon",
            UrgencyLevel::Low => "Routine care - schedule appointment when convenient",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one symptom selection against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub urgency: UrgencyLevel,
    pub advice: String,
    pub symptoms: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

impl Assessment {
    pub fn is_urgent(&self) -> bool {
        self.urgency == UrgencyLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor_with_experience(experience: u32) -> Doctor {
        Doctor::new("1", "Sarah", "Smith", vec!["Retina Specialist".into()], experience, 4.9)
    }

    #[test]
    fn test_experience_level_thresholds() {
        assert_eq!(doctor_with_experience(15).experience_level(), "highly experienced");
        assert_eq!(doctor_with_experience(14).experience_level(), "experienced");
        assert_eq!(doctor_with_experience(10).experience_level(), "experienced");
        assert_eq!(doctor_with_experience(9).experience_level(), "skilled");
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("Severe"), Some(Severity::Severe));
        assert_eq!(Severity::parse(" mild "), Some(Severity::Mild));
        assert_eq!(Severity::parse("critical"), None);
    }

    #[test]
    fn test_with_severity_leaves_original_untouched() {
        let symptom = Symptom::new("2", "Eye Pain", Severity::Severe, "acute", vec![]);
        let softened = symptom.with_severity(Severity::Mild);

        assert_eq!(symptom.severity, Severity::Severe);
        assert_eq!(softened.severity, Severity::Mild);
        assert_eq!(softened.name, "Eye Pain");
    }

    #[test]
    fn test_urgency_serializes_lowercase() {
        let json = serde_json::to_string(&UrgencyLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
        assert_eq!(UrgencyLevel::Medium.to_string(), "medium");
    }
}
