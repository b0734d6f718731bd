use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::DatapackageError;
use crate::metadata::{Contributor, License, SourceReference};

pub use crate::types::{Checksum, Filename, Keyword, MediaTypeValue, ResourceUrl, StateCode};

/// Flat file record as listed by the deposit service, after boundary normalization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFileRecord {
    /// Archived file name (also the resource name).
    pub filename: Filename,
    /// URL the file is downloaded from.
    pub download_url: ResourceUrl,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Hex-encoded content checksum.
    pub checksum: Checksum,
}

impl RawFileRecord {
    /// Create a record from its four listing fields.
    pub fn new(
        filename: impl Into<Filename>,
        download_url: impl Into<ResourceUrl>,
        size_bytes: u64,
        checksum: impl Into<Checksum>,
    ) -> Self {
        Self {
            filename: filename.into(),
            download_url: download_url.into(),
            size_bytes,
            checksum: checksum.into(),
        }
    }
}

/// Partition keys read from a filename.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionKey {
    /// Four-digit year.
    pub year: i32,
    /// Two-letter state code, case preserved. Only set for spatially partitioned datasets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateCode>,
}

impl PartitionKey {
    /// Key for a temporal-only partition.
    pub fn year(year: i32) -> Self {
        Self { year, state: None }
    }

    /// Key for a temporal and spatial partition.
    pub fn year_state(year: i32, state: impl Into<StateCode>) -> Self {
        Self {
            year,
            state: Some(state.into()),
        }
    }
}

/// Frictionless `data-resource` descriptor for one archived file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Always `data-resource`.
    pub profile: String,
    /// Full filename.
    pub name: Filename,
    /// Download URL.
    pub path: ResourceUrl,
    /// Duplicate of `path` for datasets whose schema references files remotely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<ResourceUrl>,
    /// Filename without its final extension.
    pub title: String,
    /// Partition keys read from the filename.
    pub parts: PartitionKey,
    /// Always `utf-8`.
    pub encoding: String,
    /// Canonical media type for `format`.
    pub mediatype: MediaTypeValue,
    /// Lowercased file extension.
    pub format: String,
    /// File size in bytes.
    pub bytes: u64,
    /// Content checksum.
    pub hash: Checksum,
}

/// Frictionless `data-package` document: catalog metadata plus resources.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataPackageDocument {
    pub name: String,
    pub title: String,
    pub description: String,
    pub profile: String,
    pub keywords: IndexSet<Keyword>,
    pub licenses: Vec<License>,
    pub homepage: String,
    pub sources: Vec<SourceReference>,
    pub contributors: Vec<Contributor>,
    /// One descriptor per input record, in input order.
    pub resources: Vec<ResourceDescriptor>,
    /// Instant the document was assembled.
    #[serde(serialize_with = "serialize_created")]
    pub created: DateTime<Utc>,
}

impl DataPackageDocument {
    /// Serialize to a `serde_json::Value`.
    pub fn to_json_value(&self) -> Result<serde_json::Value, DatapackageError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to pretty-printed JSON text.
    pub fn to_json_string_pretty(&self) -> Result<String, DatapackageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// ISO-8601 with an explicit `+00:00` offset and microsecond precision.
fn serialize_created<S: Serializer>(
    created: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&created.to_rfc3339_opts(SecondsFormat::Micros, false))
}
