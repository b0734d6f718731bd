/// Archived file name as listed by the deposit service.
/// Example: `epacems-2018-ca.csv`
pub type Filename = String;
/// File extension without the leading dot, as found in the filename.
/// Examples: `zip`, `csv`, `XLSX`
pub type Extension = String;
/// Canonical MIME type string.
/// Example: `application/zip`
pub type MediaTypeValue = String;
/// URL a resource is downloaded from or referenced by.
/// Example: `https://zenodo.org/api/files/.../eia860-2019.zip`
pub type ResourceUrl = String;
/// Hex-encoded content checksum reported by the deposit service.
/// Example: `d41d8cd98f00b204e9800998ecf8427e`
pub type Checksum = String;
/// Catalog identifier for an archived dataset.
/// Examples: `eia860`, `epacems`, `eiawater`
pub type DatasetId = String;
/// Two-letter state code taken verbatim from a filename.
/// Examples: `ca`, `TX`
pub type StateCode = String;
/// Descriptive keyword attached to a package.
/// Examples: `electricity`, `form 860`
pub type Keyword = String;
