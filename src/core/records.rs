use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NarrativeError, NarrativeResult};

/// Accident statistics for one covered year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: i32,
    pub deaths: u32,
    pub injured: u32,
}

impl YearRecord {
    #[must_use]
    pub fn new(year: i32, deaths: u32, injured: u32) -> Self {
        Self {
            year,
            deaths,
            injured,
        }
    }
}

/// Ordered, read-only sequence of yearly records.
///
/// Years are unique and strictly increasing. The sequence is built once and
/// never mutated afterwards; replacing data means building a new series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearSeries {
    records: Vec<YearRecord>,
}

impl YearSeries {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a series from raw records.
    ///
    /// Records are stably sorted by year and duplicate years keep the last
    /// occurrence, matching how a re-exported dataset overrides older rows.
    #[must_use]
    pub fn from_records(records: Vec<YearRecord>) -> Self {
        Self {
            records: canonicalize_records(records),
        }
    }

    /// Parses a JSON array of `{ year, deaths, injured }` objects.
    ///
    /// Unknown fields are ignored. Negative counts or non-integer years are
    /// rejected as malformed data.
    pub fn from_json_str(input: &str) -> NarrativeResult<Self> {
        let records: Vec<YearRecord> = serde_json::from_str(input).map_err(|e| {
            NarrativeError::InvalidData(format!("failed to parse year records json: {e}"))
        })?;
        Ok(Self::from_records(records))
    }

    #[must_use]
    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&YearRecord> {
        self.records.get(index)
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.records.iter().map(|record| record.year)
    }

    #[must_use]
    pub fn first_year(&self) -> Option<i32> {
        self.records.first().map(|record| record.year)
    }

    #[must_use]
    pub fn record_for_year(&self, year: i32) -> Option<&YearRecord> {
        self.records
            .binary_search_by_key(&year, |record| record.year)
            .ok()
            .map(|index| &self.records[index])
    }

    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        self.record_for_year(year).is_some()
    }
}

fn canonicalize_records(mut records: Vec<YearRecord>) -> Vec<YearRecord> {
    let original_len = records.len();
    records.sort_by_key(|record| record.year);

    let mut deduped: Vec<YearRecord> = Vec::with_capacity(records.len());
    for record in records {
        if let Some(last) = deduped.last_mut() {
            if last.year == record.year {
                *last = record;
                continue;
            }
        }
        deduped.push(record);
    }

    if deduped.len() != original_len {
        debug!(
            original_count = original_len,
            canonical_count = deduped.len(),
            "canonicalized duplicate year records"
        );
    }
    deduped
}

/// One card of the policy section.
///
/// The engine treats the list as opaque content; only its length and order
/// matter for badge numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyCard {
    pub title: String,
    pub summary: String,
    pub image: String,
    pub source: String,
}

impl PolicyCard {
    /// Parses a JSON array of policy cards.
    pub fn list_from_json_str(input: &str) -> NarrativeResult<Vec<Self>> {
        serde_json::from_str(input).map_err(|e| {
            NarrativeError::InvalidData(format!("failed to parse policy cards json: {e}"))
        })
    }
}

/// Two-digit badge shown on the card at zero-based `index` (`0` -> `"01"`).
#[must_use]
pub fn policy_badge_label(index: usize) -> String {
    format!("{:02}", index + 1)
}
