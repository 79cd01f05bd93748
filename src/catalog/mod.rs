//! Read-only roster of doctors and the clinic's symptom taxonomy.

pub mod sample;

use crate::domain::model::{Doctor, Symptom};
use crate::utils::error::{RecommenderError, Result};
use crate::utils::validation::{validate_float_range, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MAX_RATING: f64 = 5.0;

/// Key under which symptom names are compared everywhere: trimmed and
/// Unicode-lowercased.
pub fn normalize_symptom_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
}

impl Catalog {
    pub fn new(doctors: Vec<Doctor>, symptoms: Vec<Symptom>) -> Self {
        Self { doctors, symptoms }
    }

    /// 從 JSON 字串解析目錄
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 從 TOML 字串解析目錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Looks a symptom up by name, ignoring case and surrounding whitespace.
    pub fn find_symptom(&self, name: &str) -> Option<&Symptom> {
        let wanted = normalize_symptom_name(name);
        self.symptoms
            .iter()
            .find(|symptom| normalize_symptom_name(&symptom.name) == wanted)
    }

    fn validate_doctors(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, doctor) in self.doctors.iter().enumerate() {
            let field = format!("doctors[{}]", index);
            validate_non_empty_string(&format!("{}.id", field), &doctor.id)?;
            validate_non_empty_string(&format!("{}.last_name", field), &doctor.last_name)?;
            validate_float_range(&format!("{}.rating", field), doctor.rating, 0.0, MAX_RATING)?;

            if !seen.insert(doctor.id.as_str()) {
                return Err(RecommenderError::CatalogError {
                    message: format!("duplicate doctor id '{}'", doctor.id),
                });
            }
            // 空字串會被子字串比對視為匹配所有專科
            if doctor.specializations.iter().any(|s| s.trim().is_empty()) {
                return Err(RecommenderError::CatalogError {
                    message: format!("doctor '{}' has a blank specialization", doctor.id),
                });
            }
        }
        Ok(())
    }

    fn validate_symptoms(&self) -> Result<()> {
        let mut seen_ids = HashSet::new();
        let mut seen_names = HashSet::new();
        for (index, symptom) in self.symptoms.iter().enumerate() {
            let field = format!("symptoms[{}]", index);
            validate_non_empty_string(&format!("{}.id", field), &symptom.id)?;
            validate_non_empty_string(&format!("{}.name", field), &symptom.name)?;

            if !seen_ids.insert(symptom.id.as_str()) {
                return Err(RecommenderError::CatalogError {
                    message: format!("duplicate symptom id '{}'", symptom.id),
                });
            }
            if !seen_names.insert(normalize_symptom_name(&symptom.name)) {
                return Err(RecommenderError::CatalogError {
                    message: format!("duplicate symptom name '{}'", symptom.name),
                });
            }
            if symptom
                .related_specializations
                .iter()
                .any(|s| s.trim().is_empty())
            {
                return Err(RecommenderError::CatalogError {
                    message: format!(
                        "symptom '{}' has a blank related specialization",
                        symptom.name
                    ),
                });
            }
        }
        Ok(())
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        self.validate_doctors()?;
        self.validate_symptoms()?;
        Ok(())
    }
}
