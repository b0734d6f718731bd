//! Filename partition extraction.
//!
//! A `PartitionStrategy` owns a compiled pattern whose named groups yield year
//! (and state) candidates. Candidates are checked for exact length, and a
//! filename must produce exactly one valid candidate: zero is `Missing`, more
//! than one is `Ambiguous`.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::partition::{
    STATE_GROUP, STATE_LETTERS, TEMPORAL_PATTERN, TEMPORAL_SPATIAL_PATTERN, YEAR_DIGITS,
    YEAR_GROUP,
};
use crate::data::PartitionKey;
use crate::errors::{DatapackageError, PartitionFailure};

static TEMPORAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TEMPORAL_PATTERN).unwrap());

static TEMPORAL_SPATIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TEMPORAL_SPATIAL_PATTERN).unwrap());

/// Compiled pattern with its required named groups already verified.
#[derive(Clone, Debug)]
pub struct PartitionPattern {
    regex: Regex,
}

impl PartitionPattern {
    fn compile(pattern: &str, required_groups: &[&str]) -> Result<Self, DatapackageError> {
        let regex = Regex::new(pattern)
            .map_err(|err| DatapackageError::InvalidPattern(err.to_string()))?;
        for group in required_groups {
            if !regex.capture_names().flatten().any(|name| name == *group) {
                return Err(DatapackageError::InvalidPattern(format!(
                    "pattern '{pattern}' has no '{group}' capture group"
                )));
            }
        }
        Ok(Self { regex })
    }

    /// Source text of the pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Per-dataset rule for reading partition keys out of a filename.
#[derive(Clone, Debug)]
pub enum PartitionStrategy {
    /// Year only (`eia860-2019.zip`).
    Temporal(PartitionPattern),
    /// Year and state (`epacems-2018-ca.csv`).
    TemporalSpatial(PartitionPattern),
}

impl PartitionStrategy {
    /// Year-only strategy using the default digit-run pattern.
    pub fn temporal() -> Self {
        Self::Temporal(PartitionPattern {
            regex: TEMPORAL_RE.clone(),
        })
    }

    /// Year and state strategy using the default `YYYY-XX` pattern.
    pub fn temporal_spatial() -> Self {
        Self::TemporalSpatial(PartitionPattern {
            regex: TEMPORAL_SPATIAL_RE.clone(),
        })
    }

    /// Year-only strategy with a custom pattern that must define a `year` group.
    pub fn temporal_with_pattern(pattern: &str) -> Result<Self, DatapackageError> {
        PartitionPattern::compile(pattern, &[YEAR_GROUP]).map(Self::Temporal)
    }

    /// Year and state strategy with a custom pattern that must define `year` and `state` groups.
    pub fn temporal_spatial_with_pattern(pattern: &str) -> Result<Self, DatapackageError> {
        PartitionPattern::compile(pattern, &[YEAR_GROUP, STATE_GROUP]).map(Self::TemporalSpatial)
    }

    /// Pattern used by this strategy.
    pub fn pattern(&self) -> &PartitionPattern {
        match self {
            Self::Temporal(pattern) | Self::TemporalSpatial(pattern) => pattern,
        }
    }

    /// Whether the strategy yields a state code.
    pub fn is_spatial(&self) -> bool {
        matches!(self, Self::TemporalSpatial(_))
    }

    /// Extract the unique partition key from `filename`.
    pub fn extract(&self, filename: &str) -> Result<PartitionKey, PartitionFailure> {
        let mut keys = Vec::new();
        let mut fragments = Vec::new();
        for caps in self.pattern().regex.captures_iter(filename) {
            let Some(year) = caps.name(YEAR_GROUP).and_then(|m| parse_year(m.as_str())) else {
                continue;
            };
            let state = if self.is_spatial() {
                match caps
                    .name(STATE_GROUP)
                    .map(|m| m.as_str())
                    .filter(|state| is_state_code(state))
                {
                    Some(state) => Some(state.to_string()),
                    None => continue,
                }
            } else {
                None
            };
            fragments.push(caps[0].to_string());
            keys.push(PartitionKey { year, state });
        }

        match keys.len() {
            0 => Err(PartitionFailure::Missing),
            1 => Ok(keys.remove(0)),
            _ => Err(PartitionFailure::Ambiguous { matches: fragments }),
        }
    }
}

fn parse_year(run: &str) -> Option<i32> {
    if run.len() != YEAR_DIGITS || !run.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    run.parse().ok()
}

fn is_state_code(run: &str) -> bool {
    run.len() == STATE_LETTERS && run.bytes().all(|b| b.is_ascii_alphabetic())
}
