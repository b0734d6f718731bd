//! Package assembly: catalog metadata plus resource descriptors.

use std::borrow::Borrow;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::data::{DataPackageDocument, RawFileRecord, ResourceDescriptor};
use crate::errors::DatapackageError;
use crate::metadata::PackageMetadata;
use crate::resource::ResourceBuilder;

/// Assembles `data-package` documents for one dataset.
#[derive(Clone, Debug)]
pub struct PackageAssembler {
    builder: ResourceBuilder,
}

impl PackageAssembler {
    /// Create an assembler around a descriptor builder.
    pub fn new(builder: ResourceBuilder) -> Self {
        Self { builder }
    }

    /// Descriptor builder in use.
    pub fn builder(&self) -> &ResourceBuilder {
        &self.builder
    }

    /// Build every record and merge with `metadata`, stamping `created` with the current instant.
    ///
    /// All-or-nothing: the first record that fails aborts the assembly and its
    /// error is returned unchanged.
    pub fn assemble<I>(
        &self,
        metadata: &PackageMetadata,
        records: I,
    ) -> Result<DataPackageDocument, DatapackageError>
    where
        I: IntoIterator,
        I::Item: Borrow<RawFileRecord>,
    {
        let resources = self.build_resources(records)?;
        Ok(Self::merge(metadata, resources, Utc::now()))
    }

    /// Same as `assemble` with a caller-supplied `created` instant.
    pub fn assemble_at<I>(
        &self,
        metadata: &PackageMetadata,
        records: I,
        created: DateTime<Utc>,
    ) -> Result<DataPackageDocument, DatapackageError>
    where
        I: IntoIterator,
        I::Item: Borrow<RawFileRecord>,
    {
        let resources = self.build_resources(records)?;
        Ok(Self::merge(metadata, resources, created))
    }

    fn build_resources<I>(&self, records: I) -> Result<Vec<ResourceDescriptor>, DatapackageError>
    where
        I: IntoIterator,
        I::Item: Borrow<RawFileRecord>,
    {
        records
            .into_iter()
            .map(|record| self.builder.build_record(record.borrow()))
            .collect()
    }

    fn merge(
        metadata: &PackageMetadata,
        resources: Vec<ResourceDescriptor>,
        created: DateTime<Utc>,
    ) -> DataPackageDocument {
        info!(
            package = %metadata.name,
            resources = resources.len(),
            %created,
            "assembled datapackage"
        );
        DataPackageDocument {
            name: metadata.name.clone(),
            title: metadata.title.clone(),
            description: metadata.description.clone(),
            profile: metadata.profile.clone(),
            keywords: metadata.keywords.clone(),
            licenses: metadata.licenses.clone(),
            homepage: metadata.homepage.clone(),
            sources: metadata.sources.clone(),
            contributors: metadata.contributors.clone(),
            resources,
            created,
        }
    }
}
