pub mod engine;
pub mod ranking;
pub mod reason;
pub mod recommend;
pub mod scoring;
pub mod selection;
pub mod urgency;

pub use crate::domain::model::{Assessment, Doctor, Recommendation, Severity, Symptom, UrgencyLevel};
pub use crate::domain::ports::CatalogStore;
pub use crate::utils::error::Result;
