//! Collaborators that feed the packager.
//!
//! - `CatalogSource` supplies per-dataset descriptive metadata.
//! - `zenodo` models the deposit service's file listing and flattens it into
//!   `RawFileRecord`s.

use std::collections::HashMap;

use crate::errors::DatapackageError;
use crate::metadata::PackageMetadata;
use crate::types::DatasetId;

/// Built-in metadata, licenses, and contributors.
pub mod catalog;
/// Zenodo deposition listing model.
pub mod zenodo;

/// Supplier of canonical descriptive metadata per dataset.
///
/// Implementations return owned copies; the packager never mutates them.
pub trait CatalogSource: Send + Sync {
    /// Metadata for `dataset_id`, or `UnknownDataset`.
    fn get_catalog_metadata(&self, dataset_id: &str) -> Result<PackageMetadata, DatapackageError>;
}

/// In-memory catalog keyed by dataset id.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    entries: HashMap<DatasetId, PackageMetadata>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the built-in datasets.
    pub fn builtin() -> Self {
        catalog::builtin_entries()
            .into_iter()
            .fold(Self::new(), |catalog, metadata| {
                let id = metadata.name.clone();
                catalog.with_entry(id, metadata)
            })
    }

    /// Add or replace the entry for `dataset_id`.
    pub fn with_entry(mut self, dataset_id: impl Into<DatasetId>, metadata: PackageMetadata) -> Self {
        self.entries.insert(dataset_id.into(), metadata);
        self
    }

    /// Known dataset ids, sorted.
    pub fn dataset_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl CatalogSource for StaticCatalog {
    fn get_catalog_metadata(&self, dataset_id: &str) -> Result<PackageMetadata, DatapackageError> {
        self.entries
            .get(dataset_id)
            .cloned()
            .ok_or_else(|| DatapackageError::UnknownDataset(dataset_id.to_string()))
    }
}
