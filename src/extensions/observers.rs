use serde::{Deserialize, Serialize};

use crate::interaction::DragState;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub active_year: Option<i32>,
    pub records_len: usize,
    pub drag: DragState,
    pub chart_panel_open: bool,
    pub preview_year: Option<i32>,
}

/// Event stream exposed to observers.
///
/// Events fire only when the corresponding state actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NarrativeEvent {
    RecordsLoaded { records_len: usize },
    PoliciesLoaded { cards_len: usize },
    ActiveYearChanged { previous: Option<i32>, current: Option<i32> },
    DragStarted,
    SplitChanged { percent: f64 },
    DragEnded,
    ChartPanelToggled { open: bool },
    PreviewOpened { year: i32 },
    PreviewClosed,
    Rendered,
}

/// Hook interface for host-side reactions (analytics, audio cues, ...).
///
/// Observers read engine context but never mutate engine internals.
pub trait NarrativeObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: NarrativeEvent, context: ObserverContext);
}
