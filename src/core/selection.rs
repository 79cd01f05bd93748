//! Turns user-entered symptom names into catalog symptoms.

use crate::catalog::{normalize_symptom_name, Catalog};
use crate::domain::model::{Severity, Symptom};
use crate::utils::error::{RecommenderError, Result};

/// Severity chosen by the patient for one selected symptom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityOverride {
    pub symptom: String,
    pub severity: Severity,
}

impl SeverityOverride {
    /// Parses `"<symptom name>=<severity>"`, e.g. `"Eye Pain=mild"`.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = |reason: &str| RecommenderError::InvalidConfigValueError {
            field: "severity".to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let (name, level) = value
            .split_once('=')
            .ok_or_else(|| invalid("expected <symptom>=<mild|moderate|severe>"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid("symptom name cannot be empty"));
        }
        let severity = Severity::parse(level)
            .ok_or_else(|| invalid("severity must be mild, moderate or severe"))?;

        Ok(Self {
            symptom: name.to_string(),
            severity,
        })
    }
}

/// Resolves `names` against the catalog taxonomy, in the order given,
/// dropping repeats. Overrides replace the catalog's default severity.
pub fn resolve_selection(
    catalog: &Catalog,
    names: &[String],
    overrides: &[SeverityOverride],
) -> Result<Vec<Symptom>> {
    let mut selected: Vec<Symptom> = Vec::new();

    for name in names {
        if name.trim().is_empty() {
            continue;
        }
        let symptom = catalog
            .find_symptom(name)
            .ok_or_else(|| RecommenderError::UnknownSymptom { name: name.clone() })?;

        if selected.iter().any(|s| s.id == symptom.id) {
            tracing::debug!("Ignoring repeated symptom: {}", symptom.name);
            continue;
        }
        selected.push(symptom.clone());
    }

    for entry in overrides {
        let wanted = normalize_symptom_name(&entry.symptom);
        let target = selected
            .iter_mut()
            .find(|s| normalize_symptom_name(&s.name) == wanted)
            .ok_or_else(|| RecommenderError::InvalidConfigValueError {
                field: "severity".to_string(),
                value: entry.symptom.clone(),
                reason: "severity given for a symptom that is not selected".to_string(),
            })?;
        tracing::debug!(
            "Severity for {} set to {} (catalog default {})",
            target.name,
            entry.severity,
            target.severity
        );
        *target = target.with_severity(entry.severity);
    }

    if selected.is_empty() {
        return Err(RecommenderError::NoSymptomsSelected);
    }
    Ok(selected)
}
