/// Constants fixed by the frictionless data-package and data-resource profiles.
pub mod frictionless {
    /// Profile tag for a single file descriptor.
    pub const PROFILE_DATA_RESOURCE: &str = "data-resource";
    /// Profile tag for a package document.
    pub const PROFILE_DATA_PACKAGE: &str = "data-package";
    /// Encoding declared on every resource descriptor.
    pub const RESOURCE_ENCODING: &str = "utf-8";
}

/// Constants used by filename partition extraction.
pub mod partition {
    /// Named capture group holding the year candidate.
    pub const YEAR_GROUP: &str = "year";
    /// Named capture group holding the state candidate.
    pub const STATE_GROUP: &str = "state";
    /// Number of ASCII digits in a valid year run.
    pub const YEAR_DIGITS: usize = 4;
    /// Number of ASCII letters in a valid state run.
    pub const STATE_LETTERS: usize = 2;
    /// Default year pattern. Captures whole digit runs so that length can be checked.
    pub const TEMPORAL_PATTERN: &str = r"(?P<year>[0-9]+)";
    /// Default `YYYY-XX` pattern. Captures whole digit and letter runs.
    pub const TEMPORAL_SPATIAL_PATTERN: &str = r"(?P<year>[0-9]+)-(?P<state>[A-Za-z]+)";
}

/// Constants used by the default extension to media-type table.
pub mod mediatype {
    /// Built-in `(extension, media type)` entries.
    pub const DEFAULT_MEDIA_TYPES: &[(&str, &str)] = &[
        ("csv", "text/csv"),
        ("txt", "text/plain"),
        ("json", "application/json"),
        ("zip", "application/zip"),
        ("xls", "application/vnd.ms-excel"),
        (
            "xlsx",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ),
        ("parquet", "application/vnd.apache.parquet"),
        ("pdf", "application/pdf"),
    ];
}

/// Catalog identifiers for the archived datasets.
pub mod datasets {
    /// EIA Form 860 annual generator data.
    pub const EIA860_ID: &str = "eia860";
    /// EPA Continuous Emissions Monitoring System hourly data.
    pub const EPACEMS_ID: &str = "epacems";
    /// EIA thermoelectric cooling water data.
    pub const EIAWATER_ID: &str = "eiawater";
}
