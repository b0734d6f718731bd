//! Built-in descriptive metadata for the archived datasets.

use crate::constants::datasets::{EIA860_ID, EIAWATER_ID, EPACEMS_ID};
use crate::metadata::{Contributor, License, PackageMetadata, SourceReference};

const PUDL_HOMEPAGE: &str = "https://catalyst.coop/pudl/";

/// Public-domain label for U.S. government works.
pub fn us_govt_license() -> License {
    License::new(
        "other-pd",
        "U.S. Government Work",
        "http://www.usa.gov/publicdomain/label/1.0/",
    )
}

/// Creative Commons Attribution 4.0.
pub fn cc_by_license() -> License {
    License::new(
        "CC-BY-4.0",
        "Creative Commons Attribution 4.0",
        "https://creativecommons.org/licenses/by/4.0",
    )
}

/// Publisher of the archives.
pub fn catalyst_cooperative() -> Contributor {
    Contributor {
        title: "Catalyst Cooperative".to_string(),
        path: "https://catalyst.coop/".to_string(),
        email: Some("pudl@catalyst.coop".to_string()),
        role: "publisher".to_string(),
        organization: Some("Catalyst Cooperative".to_string()),
    }
}

/// EIA Form 860 archives.
pub fn eia860() -> PackageMetadata {
    PackageMetadata::new(EIA860_ID, "EIA Form 860")
        .with_description(
            "Form EIA-860 data for electric power plants with 1 megawatt or greater \
             combined nameplate capacity.",
        )
        .with_keywords([
            "electricity",
            "electric",
            "boiler",
            "generator",
            "plant",
            "utility",
            "fuel",
            "coal",
            "natural gas",
            "prime mover",
            "eia860",
            "retirement",
            "capacity",
            "planned",
            "proposed",
            "energy",
            "hydro",
            "solar",
            "wind",
            "nuclear",
            "form 860",
            "eia",
            "annual",
            "gas",
            "ownership",
            "steam",
            "turbine",
            "combustion",
            "combined cycle",
            "energy information administration",
        ])
        .with_license(us_govt_license())
        .with_license(cc_by_license())
        .with_homepage(PUDL_HOMEPAGE)
        .with_source(SourceReference::new(
            "US Energy Information Administration",
            "https://www.eia.gov/electricity/data/eia860/",
        ))
        .with_contributor(catalyst_cooperative())
}

/// EPA CEMS hourly emissions archives, partitioned by year and state.
pub fn epacems() -> PackageMetadata {
    PackageMetadata::new(EPACEMS_ID, "Continuous Emissions Monitoring System (CEMS)")
        .with_description(
            "US EPA hourly Continuous Emissions Monitoring System (CEMS) data, \
             partitioned by year and state.",
        )
        .with_keywords([
            "epa",
            "us",
            "emissions",
            "pollution",
            "ghg",
            "so2",
            "co2",
            "sox",
            "nox",
            "load",
            "utility",
            "electricity",
            "plant",
            "generator",
            "unit",
            "generation",
            "capacity",
            "output",
            "power",
            "heat content",
            "mmbtu",
            "steam",
            "cems",
            "continuous emissions monitoring system",
            "hourly",
            "environmental protection agency",
            "ampd",
            "air markets program data",
        ])
        .with_license(us_govt_license())
        .with_license(cc_by_license())
        .with_homepage(PUDL_HOMEPAGE)
        .with_source(SourceReference::new(
            "US Environmental Protection Agency",
            "https://ampd.epa.gov/ampd/",
        ))
        .with_contributor(catalyst_cooperative())
}

/// EIA thermoelectric cooling water archives.
pub fn eiawater() -> PackageMetadata {
    PackageMetadata::new(EIAWATER_ID, "EIA Thermoelectric Cooling Water")
        .with_description(
            "Monthly and annual thermoelectric power plant cooling water withdrawal and \
             consumption data collected by the EIA.",
        )
        .with_keywords([
            "eia",
            "water",
            "cooling",
            "thermoelectric",
            "withdrawal",
            "consumption",
            "electricity",
            "plant",
            "energy information administration",
        ])
        .with_license(us_govt_license())
        .with_license(cc_by_license())
        .with_homepage(PUDL_HOMEPAGE)
        .with_source(SourceReference::new(
            "US Energy Information Administration",
            "https://www.eia.gov/electricity/data/water/",
        ))
        .with_contributor(catalyst_cooperative())
}

/// All built-in entries; each is named by its dataset id.
pub fn builtin_entries() -> Vec<PackageMetadata> {
    vec![eia860(), epacems(), eiawater()]
}
