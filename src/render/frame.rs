use crate::error::NarrativeResult;
use crate::render::{BackgroundLayer, ChartMarker, ChartSegment, ComparisonLayout, HudReadout};

/// Backend-agnostic scene for one presentation draw pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NarrativeFrame {
    pub active_year: Option<i32>,
    pub background: Vec<BackgroundLayer>,
    pub hud: HudReadout,
    pub chart_segments: Vec<ChartSegment>,
    pub chart_markers: Vec<ChartMarker>,
    pub chart_panel_open: bool,
    pub comparison: Option<ComparisonLayout>,
}

impl NarrativeFrame {
    #[must_use]
    pub fn new(active_year: Option<i32>) -> Self {
        Self {
            active_year,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_background(mut self, layers: Vec<BackgroundLayer>) -> Self {
        self.background = layers;
        self
    }

    #[must_use]
    pub fn with_hud(mut self, hud: HudReadout) -> Self {
        self.hud = hud;
        self
    }

    #[must_use]
    pub fn with_chart(
        mut self,
        segments: Vec<ChartSegment>,
        markers: Vec<ChartMarker>,
        panel_open: bool,
    ) -> Self {
        self.chart_segments = segments;
        self.chart_markers = markers;
        self.chart_panel_open = panel_open;
        self
    }

    #[must_use]
    pub fn with_comparison(mut self, layout: Option<ComparisonLayout>) -> Self {
        self.comparison = layout;
        self
    }

    pub fn validate(&self) -> NarrativeResult<()> {
        for layer in &self.background {
            layer.validate()?;
        }
        for segment in &self.chart_segments {
            segment.validate()?;
        }
        for marker in &self.chart_markers {
            marker.validate()?;
        }
        if let Some(layout) = self.comparison {
            layout.validate()?;
        }
        Ok(())
    }

    /// Number of background layers currently shown.
    #[must_use]
    pub fn visible_background_count(&self) -> usize {
        self.background.iter().filter(|layer| layer.is_visible()).count()
    }
}
