pub mod adapters;
pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Settings};

pub use crate::adapters::{BuiltinCatalogStore, ConfiguredCatalogStore, FileCatalogStore};
pub use crate::catalog::Catalog;
pub use crate::core::engine::RecommendationEngine;
pub use crate::core::ranking::compare_recommendations;
pub use crate::core::recommend::generate_recommendations;
pub use crate::core::scoring::match_score;
pub use crate::core::urgency::emergency_level;
pub use crate::domain::model::{Assessment, Doctor, Recommendation, Severity, Symptom, UrgencyLevel};
pub use crate::report::OutputFormat;
pub use crate::utils::error::{RecommenderError, Result};
