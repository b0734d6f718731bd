//! Resource descriptor derivation.
//!
//! `ResourceBuilder` turns one listing record into one `data-resource`
//! descriptor. It is a pure function of its configuration and inputs: the
//! partition strategy reads year (and state) from the filename, and the media
//! type table resolves the extension.

use std::sync::Arc;

use tracing::debug;

use crate::constants::frictionless::{PROFILE_DATA_RESOURCE, RESOURCE_ENCODING};
use crate::data::{RawFileRecord, ResourceDescriptor};
use crate::errors::DatapackageError;
use crate::utils::split_extension;

/// Extension to media-type lookup.
pub mod mediatype;
/// Filename partition strategies.
pub mod partition;

pub use mediatype::MediaTypeTable;
pub use partition::{PartitionPattern, PartitionStrategy};

/// Builds `data-resource` descriptors for one dataset.
#[derive(Clone, Debug)]
pub struct ResourceBuilder {
    partition: PartitionStrategy,
    media_types: Arc<MediaTypeTable>,
    include_remote_url: bool,
}

impl ResourceBuilder {
    /// Create a builder with the default media-type table.
    pub fn new(partition: PartitionStrategy) -> Self {
        Self {
            partition,
            media_types: Arc::new(MediaTypeTable::default()),
            include_remote_url: false,
        }
    }

    /// Replace the media-type table.
    pub fn with_media_types(mut self, media_types: impl Into<Arc<MediaTypeTable>>) -> Self {
        self.media_types = media_types.into();
        self
    }

    /// Emit `remote_url` (a copy of `path`) on every descriptor.
    pub fn with_remote_url(mut self, include_remote_url: bool) -> Self {
        self.include_remote_url = include_remote_url;
        self
    }

    /// Partition strategy in use.
    pub fn partition(&self) -> &PartitionStrategy {
        &self.partition
    }

    /// Build the descriptor for one file.
    ///
    /// Fails with `MalformedFilename` when the filename does not carry exactly
    /// one partition key, and with `UnknownFormat` when its extension is not in
    /// the media-type table. The partition is checked first.
    pub fn build(
        &self,
        filename: &str,
        url: &str,
        size: u64,
        hash: &str,
    ) -> Result<ResourceDescriptor, DatapackageError> {
        let (title, extension) = split_extension(filename);

        let parts =
            self.partition
                .extract(filename)
                .map_err(|reason| DatapackageError::MalformedFilename {
                    filename: filename.to_string(),
                    reason,
                })?;

        let format = extension.to_ascii_lowercase();
        let mediatype = self
            .media_types
            .resolve(&format)
            .ok_or_else(|| DatapackageError::UnknownFormat {
                filename: filename.to_string(),
                extension: extension.to_string(),
            })?
            .to_string();

        debug!(filename, year = parts.year, state = ?parts.state, %mediatype, "built resource descriptor");

        Ok(ResourceDescriptor {
            profile: PROFILE_DATA_RESOURCE.to_string(),
            name: filename.to_string(),
            path: url.to_string(),
            remote_url: self.include_remote_url.then(|| url.to_string()),
            title: title.to_string(),
            parts,
            encoding: RESOURCE_ENCODING.to_string(),
            mediatype,
            format,
            bytes: size,
            hash: hash.to_string(),
        })
    }

    /// Build the descriptor for a normalized listing record.
    pub fn build_record(&self, record: &RawFileRecord) -> Result<ResourceDescriptor, DatapackageError> {
        self.build(
            &record.filename,
            &record.download_url,
            record.size_bytes,
            &record.checksum,
        )
    }
}
