use crate::core::YearSeries;
use crate::render::{HudReadout, Renderer};

use super::NarrativeEngine;

/// Looks up the counters of the active year.
///
/// The year is shown even when no record matches it; the counters then stay
/// blank.
#[must_use]
pub fn hud_readout(series: &YearSeries, active_year: Option<i32>) -> HudReadout {
    let Some(year) = active_year else {
        return HudReadout::default();
    };
    match series.record_for_year(year) {
        Some(record) => HudReadout {
            year: Some(year),
            deaths: Some(record.deaths),
            injured: Some(record.injured),
        },
        None => HudReadout {
            year: Some(year),
            ..HudReadout::default()
        },
    }
}

impl<R: Renderer> NarrativeEngine<R> {
    #[must_use]
    pub fn hud_readout(&self) -> HudReadout {
        hud_readout(&self.core.model.records, self.core.scroll.active_year)
    }
}
