use crate::core::{ContainerRect, PolicyCard, ScrollMetrics, Viewport, YearSeries};
use crate::extensions::NarrativeObserver;
use crate::interaction::{ChartPanelState, ComparisonDrag, PreviewOverlay};

use super::NarrativeConfig;

/// Loaded content. Written by the data controller only.
#[derive(Debug, Default)]
pub(super) struct NarrativeModel {
    pub(super) records: YearSeries,
    pub(super) policies: Vec<PolicyCard>,
}

/// Scroll-derived state of the narrative section.
#[derive(Debug, Default)]
pub(super) struct ScrollState {
    pub(super) last_metrics: ScrollMetrics,
    pub(super) mounted: bool,
    pub(super) active_year: Option<i32>,
}

/// Per-widget interaction state.
#[derive(Debug)]
pub(super) struct WidgetState {
    pub(super) comparison: ComparisonDrag,
    pub(super) comparison_container: Option<ContainerRect>,
    pub(super) chart_panel: ChartPanelState,
    pub(super) chart_viewport: Option<Viewport>,
    pub(super) preview: PreviewOverlay,
}

/// Internal engine core state used by the public facade (`NarrativeEngine`).
pub(super) struct EngineCore {
    pub(super) config: NarrativeConfig,
    pub(super) model: NarrativeModel,
    pub(super) scroll: ScrollState,
    pub(super) widgets: WidgetState,
    pub(super) observers: Vec<Box<dyn NarrativeObserver>>,
}

impl EngineCore {
    pub(super) fn new(config: NarrativeConfig) -> Self {
        let widgets = WidgetState {
            comparison: ComparisonDrag::new(config.initial_split_percent),
            comparison_container: None,
            chart_panel: ChartPanelState::new(config.chart_panel_breakpoint_px),
            chart_viewport: None,
            preview: PreviewOverlay::default(),
        };
        Self {
            config,
            model: NarrativeModel::default(),
            scroll: ScrollState::default(),
            widgets,
            observers: Vec::new(),
        }
    }
}
