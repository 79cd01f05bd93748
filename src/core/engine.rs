use crate::catalog::Catalog;
use crate::core::recommend::generate_recommendations;
use crate::core::selection::{resolve_selection, SeverityOverride};
use crate::core::urgency::emergency_level;
use crate::domain::model::{Assessment, Symptom, UrgencyLevel};
use crate::domain::ports::CatalogStore;
use crate::utils::error::Result;

/// Holds a loaded catalog and assesses symptom selections against it.
///
/// The catalog is read once in [`RecommendationEngine::load`] and never
/// modified afterwards; every assessment recomputes from scratch.
pub struct RecommendationEngine {
    catalog: Catalog,
}

impl RecommendationEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub async fn load<S: CatalogStore>(store: &S) -> Result<Self> {
        tracing::info!("📚 Loading catalog from {}", store.describe());
        let catalog = store.load_catalog().await?;
        tracing::info!(
            "Loaded {} doctors and {} symptoms",
            catalog.doctors.len(),
            catalog.symptoms.len()
        );
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Scores already-resolved symptoms.
    pub fn assess(&self, symptoms: &[Symptom]) -> Assessment {
        let urgency = emergency_level(symptoms);
        let recommendations = generate_recommendations(&self.catalog.doctors, symptoms);

        tracing::info!(
            "Assessed {} symptoms: urgency {}, {} doctors recommended",
            symptoms.len(),
            urgency,
            recommendations.len()
        );
        if urgency == UrgencyLevel::High {
            tracing::warn!("🚨 {}", urgency.advice());
        }

        Assessment {
            urgency,
            advice: urgency.advice().to_string(),
            symptoms: symptoms.iter().map(|s| s.name.clone()).collect(),
            recommendations,
        }
    }

    /// Resolves symptom names against the catalog, then scores them.
    pub fn assess_names(
        &self,
        names: &[String],
        overrides: &[SeverityOverride],
    ) -> Result<Assessment> {
        let symptoms = resolve_selection(&self.catalog, names, overrides)?;
        Ok(self.assess(&symptoms))
    }
}
