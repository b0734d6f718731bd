use std::sync::Arc;

use crate::resource::{MediaTypeTable, PartitionStrategy, ResourceBuilder};
use crate::source::zenodo::UrlField;
use crate::types::DatasetId;

/// Per-dataset packaging configuration.
#[derive(Clone, Debug)]
pub struct DatasetConfig {
    /// Catalog identifier used to look up package metadata.
    pub dataset_id: DatasetId,
    /// How partition keys are read from filenames.
    pub partition: PartitionStrategy,
    /// Which listing link becomes the resource `path`.
    pub url_field: UrlField,
    /// Whether descriptors also carry `remote_url`.
    pub include_remote_url: bool,
    /// Extension to media-type lookup.
    pub media_types: Arc<MediaTypeTable>,
}

impl DatasetConfig {
    /// Create a config with the download link, no `remote_url`, and the default media types.
    pub fn new(dataset_id: impl Into<DatasetId>, partition: PartitionStrategy) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            partition,
            url_field: UrlField::Download,
            include_remote_url: false,
            media_types: Arc::new(MediaTypeTable::default()),
        }
    }

    /// Override which listing link is used as the resource path.
    pub fn with_url_field(mut self, url_field: UrlField) -> Self {
        self.url_field = url_field;
        self
    }

    /// Override whether descriptors carry `remote_url`.
    pub fn with_remote_url(mut self, include_remote_url: bool) -> Self {
        self.include_remote_url = include_remote_url;
        self
    }

    /// Replace the media-type table.
    pub fn with_media_types(mut self, media_types: MediaTypeTable) -> Self {
        self.media_types = Arc::new(media_types);
        self
    }

    /// Descriptor builder for this dataset.
    pub fn resource_builder(&self) -> ResourceBuilder {
        ResourceBuilder::new(self.partition.clone())
            .with_media_types(Arc::clone(&self.media_types))
            .with_remote_url(self.include_remote_url)
    }
}
