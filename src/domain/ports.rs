use crate::catalog::Catalog;
use crate::utils::error::Result;

/// Source of the read-only doctor roster and symptom taxonomy.
pub trait CatalogStore: Send + Sync {
    fn load_catalog(&self) -> impl std::future::Future<Output = Result<Catalog>> + Send;

    /// Human readable origin, used in log lines.
    fn describe(&self) -> String;
}
