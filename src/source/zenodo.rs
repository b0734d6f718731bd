//! Zenodo deposition file listing and its normalization to `RawFileRecord`.
//!
//! Zenodo reports each archived file with both a `self` API link and a
//! `download` link. Datasets differ in which one their descriptors reference,
//! so the choice is made here at the boundary and the rest of the crate only
//! sees flat records.

use serde::{Deserialize, Serialize};

use crate::data::RawFileRecord;
use crate::errors::DatapackageError;
use crate::types::{Checksum, Filename, ResourceUrl};

/// One entry of a deposition's file listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositionFile {
    /// Zenodo file identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Archived file name.
    pub filename: Filename,
    /// Size in bytes.
    pub filesize: u64,
    /// Content checksum as reported.
    pub checksum: Checksum,
    /// API and download links.
    pub links: DepositionLinks,
}

/// Links attached to a deposition file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositionLinks {
    /// API link to the file record.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<ResourceUrl>,
    /// Direct download link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download: Option<ResourceUrl>,
}

/// Which deposition link becomes a resource's `path`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrlField {
    /// `links.self`.
    SelfLink,
    /// `links.download`.
    Download,
}

impl UrlField {
    /// Key of the link in the listing JSON.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SelfLink => "self",
            Self::Download => "download",
        }
    }

    fn select<'a>(&self, links: &'a DepositionLinks) -> Option<&'a ResourceUrl> {
        match self {
            Self::SelfLink => links.self_link.as_ref(),
            Self::Download => links.download.as_ref(),
        }
    }
}

impl DepositionFile {
    /// Flatten into a `RawFileRecord` using the selected link as download URL.
    pub fn to_raw_record(&self, url_field: UrlField) -> Result<RawFileRecord, DatapackageError> {
        let url = url_field
            .select(&self.links)
            .ok_or_else(|| DatapackageError::MissingUrl {
                filename: self.filename.clone(),
                field: url_field.as_str(),
            })?;
        Ok(RawFileRecord::new(
            self.filename.clone(),
            url.clone(),
            self.filesize,
            self.checksum.clone(),
        ))
    }
}

/// Normalize a whole listing, preserving order. Fails on the first entry lacking the link.
pub fn normalize_listing(
    files: &[DepositionFile],
    url_field: UrlField,
) -> Result<Vec<RawFileRecord>, DatapackageError> {
    files
        .iter()
        .map(|file| file.to_raw_record(url_field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing() -> Vec<DepositionFile> {
        serde_json::from_value(json!([
            {
                "id": "f1",
                "filename": "eia860-2019.zip",
                "filesize": 2048,
                "checksum": "0a1b",
                "links": {
                    "self": "https://zenodo.org/api/files/b/eia860-2019.zip",
                    "download": "https://zenodo.org/api/files/b/eia860-2019.zip?download=1"
                }
            },
            {
                "filename": "eia860-2020.zip",
                "filesize": 4096,
                "checksum": "2c3d",
                "links": {"self": "https://zenodo.org/api/files/b/eia860-2020.zip"}
            }
        ]))
        .unwrap()
    }

    #[test]
    fn deserializes_listing_entries() {
        let files = listing();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].id.as_deref(), Some("f1"));
        assert_eq!(files[1].id, None);
        assert_eq!(files[1].links.download, None);
    }

    #[test]
    fn url_field_selects_link() {
        let files = listing();
        let via_self = files[0].to_raw_record(UrlField::SelfLink).unwrap();
        let via_download = files[0].to_raw_record(UrlField::Download).unwrap();
        assert_eq!(
            via_self.download_url,
            "https://zenodo.org/api/files/b/eia860-2019.zip"
        );
        assert!(via_download.download_url.ends_with("?download=1"));
        assert_eq!(via_self.size_bytes, 2048);
        assert_eq!(via_self.checksum, "0a1b");
    }

    #[test]
    fn normalize_listing_keeps_order_and_fails_on_missing_link() {
        let files = listing();
        let records = normalize_listing(&files, UrlField::SelfLink).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["eia860-2019.zip", "eia860-2020.zip"]);

        let err = normalize_listing(&files, UrlField::Download).unwrap_err();
        assert!(matches!(
            err,
            DatapackageError::MissingUrl { ref filename, field: "download" } if filename == "eia860-2020.zip"
        ));
    }
}
