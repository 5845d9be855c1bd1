use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::{PolicyCard, YearRecord, YearSeries};
use crate::error::{NarrativeError, NarrativeResult};
use crate::render::Renderer;

use super::{NarrativeEngine, NarrativeEvent};

impl<R: Renderer> NarrativeEngine<R> {
    /// Replaces the yearly record sequence and re-derives the active year
    /// from the last observed scroll position.
    pub fn set_records(&mut self, records: Vec<YearRecord>) {
        let original_count = records.len();
        let series = YearSeries::from_records(records);
        debug!(
            original_count,
            canonical_count = series.len(),
            "set year records"
        );
        self.replace_records(series);
    }

    /// Loads records from a JSON array, best effort.
    ///
    /// On malformed input the failure is logged and the current sequence
    /// (empty at startup) is kept. Returns the number of records held
    /// afterwards.
    pub fn load_records_json(&mut self, input: &str) -> usize {
        match YearSeries::from_json_str(input) {
            Ok(series) => {
                debug!(canonical_count = series.len(), "loaded year records json");
                self.replace_records(series);
            }
            Err(err) => {
                warn!(error = %err, "failed to load year records; continuing without them");
            }
        }
        self.core.model.records.len()
    }

    /// Reads and loads a records file, best effort (see `load_records_json`).
    pub fn load_records_file(&mut self, path: impl AsRef<Path>) -> usize {
        match read_source(path.as_ref()) {
            Ok(raw) => self.load_records_json(&raw),
            Err(err) => {
                warn!(error = %err, "failed to read year records; continuing without them");
                self.core.model.records.len()
            }
        }
    }

    #[must_use]
    pub fn records(&self) -> &YearSeries {
        &self.core.model.records
    }

    pub fn set_policies(&mut self, cards: Vec<PolicyCard>) {
        debug!(count = cards.len(), "set policy cards");
        self.core.model.policies = cards;
        self.emit_event(NarrativeEvent::PoliciesLoaded {
            cards_len: self.core.model.policies.len(),
        });
    }

    /// Loads policy cards from a JSON array, best effort.
    pub fn load_policies_json(&mut self, input: &str) -> usize {
        match PolicyCard::list_from_json_str(input) {
            Ok(cards) => self.set_policies(cards),
            Err(err) => {
                warn!(error = %err, "failed to load policy cards; continuing without them");
            }
        }
        self.core.model.policies.len()
    }

    pub fn load_policies_file(&mut self, path: impl AsRef<Path>) -> usize {
        match read_source(path.as_ref()) {
            Ok(raw) => self.load_policies_json(&raw),
            Err(err) => {
                warn!(error = %err, "failed to read policy cards; continuing without them");
                self.core.model.policies.len()
            }
        }
    }

    #[must_use]
    pub fn policies(&self) -> &[PolicyCard] {
        &self.core.model.policies
    }

    fn replace_records(&mut self, series: YearSeries) {
        self.core.model.records = series;
        self.emit_event(NarrativeEvent::RecordsLoaded {
            records_len: self.core.model.records.len(),
        });
        self.refresh_active_year();
    }
}

fn read_source(path: &Path) -> NarrativeResult<String> {
    fs::read_to_string(path).map_err(|err| NarrativeError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}
