use crate::catalog::{sample, Catalog};
use crate::domain::ports::CatalogStore;
use crate::utils::error::{RecommenderError, Result};
use crate::utils::validation::Validate;
use std::path::{Path, PathBuf};

/// Catalog read from a `.json` or `.toml` file on disk.
#[derive(Debug, Clone)]
pub struct FileCatalogStore {
    path: PathBuf,
}

impl FileCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<Catalog> {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Catalog::from_json_str(content),
            Some("toml") => Catalog::from_toml_str(content),
            other => Err(RecommenderError::UnsupportedFormat {
                format: other.unwrap_or("<none>").to_string(),
            }),
        }
    }
}

impl CatalogStore for FileCatalogStore {
    async fn load_catalog(&self) -> Result<Catalog> {
        tracing::debug!("Reading catalog file: {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;

        let catalog = self.parse(&content)?;
        catalog.validate()?;

        tracing::debug!(
            doctors = catalog.doctors.len(),
            symptoms = catalog.symptoms.len(),
            "Catalog file parsed"
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// The demo clinic compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogStore;

impl CatalogStore for BuiltinCatalogStore {
    async fn load_catalog(&self) -> Result<Catalog> {
        Ok(sample::sample_catalog())
    }

    fn describe(&self) -> String {
        "built-in sample catalog".to_string()
    }
}

/// Picks the file store when a path is configured, the built-in one otherwise.
#[derive(Debug, Clone)]
pub enum ConfiguredCatalogStore {
    File(FileCatalogStore),
    Builtin(BuiltinCatalogStore),
}

impl ConfiguredCatalogStore {
    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(path) => ConfiguredCatalogStore::File(FileCatalogStore::new(path)),
            None => ConfiguredCatalogStore::Builtin(BuiltinCatalogStore),
        }
    }
}

impl CatalogStore for ConfiguredCatalogStore {
    async fn load_catalog(&self) -> Result<Catalog> {
        match self {
            ConfiguredCatalogStore::File(store) => store.load_catalog().await,
            ConfiguredCatalogStore::Builtin(store) => store.load_catalog().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            ConfiguredCatalogStore::File(store) => store.describe(),
            ConfiguredCatalogStore::Builtin(store) => store.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[tokio::test]
    async fn test_builtin_store_loads_sample() {
        let catalog = BuiltinCatalogStore.load_catalog().await.unwrap();
        assert_eq!(catalog.doctors.len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_extension_rejected() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"doctors: []").unwrap();

        let store = FileCatalogStore::new(file.path());
        let err = store.load_catalog().await.unwrap_err();
        assert!(matches!(err, RecommenderError::UnsupportedFormat { .. }));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let store = FileCatalogStore::new("/definitely/not/here/catalog.json");
        let err = store.load_catalog().await.unwrap_err();
        assert!(matches!(err, RecommenderError::IoError(_)));
    }

    #[test]
    fn test_configured_store_selection() {
        assert!(matches!(
            ConfiguredCatalogStore::from_path(None),
            ConfiguredCatalogStore::Builtin(_)
        ));
        let store = ConfiguredCatalogStore::from_path(Some("clinic.toml"));
        assert_eq!(store.describe(), "file clinic.toml");
    }
}
