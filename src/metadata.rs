//! Package-level descriptive metadata supplied by the catalog.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::constants::frictionless::PROFILE_DATA_PACKAGE;
use crate::types::Keyword;

/// License entry in a package's `licenses` list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// Short identifier (e.g. `CC-BY-4.0`).
    pub name: String,
    /// Human readable name.
    pub title: String,
    /// Canonical license URL.
    pub path: String,
}

impl License {
    /// Create a license entry.
    pub fn new(name: impl Into<String>, title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            path: path.into(),
        }
    }
}

/// Upstream publisher of the archived data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReference {
    pub title: String,
    pub path: String,
}

impl SourceReference {
    /// Create a source reference.
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// Person or organization credited on a package.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub title: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

/// Static descriptive record for one dataset.
///
/// Treated as read-only input by the assembler; documents copy its fields by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Package name.
    pub name: String,
    /// Package title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Always `data-package` unless a catalog overrides it.
    pub profile: String,
    /// Keywords, deduplicated in first-seen order.
    pub keywords: IndexSet<Keyword>,
    /// Licenses, in catalog order.
    pub licenses: Vec<License>,
    /// Project homepage.
    pub homepage: String,
    /// Upstream publishers.
    pub sources: Vec<SourceReference>,
    /// Credited contributors.
    pub contributors: Vec<Contributor>,
}

impl PackageMetadata {
    /// Create metadata with the given name and title and empty collections.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: String::new(),
            profile: PROFILE_DATA_PACKAGE.to_string(),
            keywords: IndexSet::new(),
            licenses: Vec::new(),
            homepage: String::new(),
            sources: Vec::new(),
            contributors: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add keywords; repeats of an existing keyword are dropped.
    pub fn with_keywords<I, K>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Keyword>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Append a license.
    pub fn with_license(mut self, license: License) -> Self {
        self.licenses.push(license);
        self
    }

    /// Set the homepage.
    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = homepage.into();
        self
    }

    /// Append an upstream source.
    pub fn with_source(mut self, source: SourceReference) -> Self {
        self.sources.push(source);
        self
    }

    /// Append a contributor.
    pub fn with_contributor(mut self, contributor: Contributor) -> Self {
        self.contributors.push(contributor);
        self
    }
}
