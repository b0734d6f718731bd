#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Per-dataset packaging configuration.
pub mod config;
/// Centralized constants used across builders, catalog, and datasets.
pub mod constants;
/// Listing record, descriptor, and document types.
pub mod data;
/// Known datasets and their packaging entry points.
pub mod datasets;
/// Package-level descriptive metadata.
pub mod metadata;
/// Package assembly.
pub mod package;
/// Resource descriptor derivation.
pub mod resource;
/// Catalog and deposit-listing collaborators.
pub mod source;
/// Shared type aliases.
pub mod types;
/// Filename helpers.
pub mod utils;

mod errors;

pub use config::DatasetConfig;
pub use data::{DataPackageDocument, PartitionKey, RawFileRecord, ResourceDescriptor};
pub use datasets::{Dataset, datapackager, package_with_config};
pub use errors::{DatapackageError, PartitionFailure};
pub use metadata::{Contributor, License, PackageMetadata, SourceReference};
pub use package::PackageAssembler;
pub use resource::{MediaTypeTable, PartitionStrategy, ResourceBuilder};
pub use source::{CatalogSource, StaticCatalog};
pub use types::{
    Checksum, DatasetId, Extension, Filename, Keyword, MediaTypeValue, ResourceUrl, StateCode,
};
