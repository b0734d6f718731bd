//! Per-dataset packaging entry points.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::config::DatasetConfig;
use crate::constants::datasets::{EIA860_ID, EIAWATER_ID, EPACEMS_ID};
use crate::data::DataPackageDocument;
use crate::errors::DatapackageError;
use crate::package::PackageAssembler;
use crate::resource::PartitionStrategy;
use crate::source::CatalogSource;
use crate::source::zenodo::{DepositionFile, UrlField, normalize_listing};

/// Archived datasets with a known packaging layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// EIA Form 860, one archive per year.
    Eia860,
    /// EPA CEMS hourly, one file per year and state.
    Epacems,
    /// EIA thermoelectric cooling water, one archive per year.
    EiaWater,
}

impl Dataset {
    /// Every known dataset.
    pub const ALL: [Dataset; 3] = [Dataset::Eia860, Dataset::Epacems, Dataset::EiaWater];

    /// Catalog identifier.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Eia860 => EIA860_ID,
            Self::Epacems => EPACEMS_ID,
            Self::EiaWater => EIAWATER_ID,
        }
    }

    /// Look up a dataset by catalog identifier.
    pub fn from_id(id: &str) -> Result<Self, DatapackageError> {
        Self::ALL
            .into_iter()
            .find(|dataset| dataset.id() == id)
            .ok_or_else(|| DatapackageError::UnknownDataset(id.to_string()))
    }

    /// Packaging configuration for this dataset.
    pub fn config(&self) -> DatasetConfig {
        match self {
            Self::Eia860 => DatasetConfig::new(EIA860_ID, PartitionStrategy::temporal())
                .with_url_field(UrlField::SelfLink),
            Self::Epacems => DatasetConfig::new(EPACEMS_ID, PartitionStrategy::temporal_spatial())
                .with_url_field(UrlField::Download)
                .with_remote_url(true),
            Self::EiaWater => DatasetConfig::new(EIAWATER_ID, PartitionStrategy::temporal())
                .with_url_field(UrlField::Download),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Dataset {
    type Err = DatapackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

/// Produce the datapackage for `dataset` from its Zenodo file listing.
pub fn datapackager(
    dataset: Dataset,
    catalog: &dyn CatalogSource,
    files: &[DepositionFile],
) -> Result<DataPackageDocument, DatapackageError> {
    package_with_config(&dataset.config(), catalog, files)
}

/// Produce a datapackage using an explicit configuration.
pub fn package_with_config(
    config: &DatasetConfig,
    catalog: &dyn CatalogSource,
    files: &[DepositionFile],
) -> Result<DataPackageDocument, DatapackageError> {
    let metadata = catalog.get_catalog_metadata(&config.dataset_id)?;
    let records = normalize_listing(files, config.url_field)?;
    debug!(
        dataset = %config.dataset_id,
        files = records.len(),
        url_field = config.url_field.as_str(),
        "packaging deposition listing"
    );
    PackageAssembler::new(config.resource_builder()).assemble(&metadata, &records)
}
