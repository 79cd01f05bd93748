// Adapters layer: concrete implementations of the domain ports.

pub mod catalog_store;

pub use catalog_store::{BuiltinCatalogStore, ConfiguredCatalogStore, FileCatalogStore};
