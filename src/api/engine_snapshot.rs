use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::interaction::DragState;
use crate::render::{HudReadout, Renderer};

use super::NarrativeEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeSnapshot {
    pub records_len: usize,
    pub scroll_fraction: f64,
    pub active_year: Option<i32>,
    pub hud: HudReadout,
    pub background_presence: IndexMap<i32, bool>,
    pub drag: DragState,
    pub chart_panel_open: bool,
    pub preview_year: Option<i32>,
}

impl<R: Renderer> NarrativeEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> NarrativeSnapshot {
        NarrativeSnapshot {
            records_len: self.core.model.records.len(),
            scroll_fraction: self.scroll_fraction(),
            active_year: self.active_year(),
            hud: self.hud_readout(),
            background_presence: self.background_presence(),
            drag: self.drag_state(),
            chart_panel_open: self.chart_panel_open(),
            preview_year: self.preview_year(),
        }
    }
}
