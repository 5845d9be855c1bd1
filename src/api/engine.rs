use tracing::warn;

use crate::error::NarrativeResult;
use crate::render::{NarrativeFrame, Renderer};

use super::{NarrativeConfig, NarrativeEvent, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `NarrativeEngine` owns the loaded records, the scroll-derived active year
/// and the per-widget interaction state, and materializes frames for the
/// renderer. Every handler runs synchronously to completion, so one event
/// never observes another half-applied.
pub struct NarrativeEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> NarrativeEngine<R> {
    /// Creates an engine with no records loaded.
    pub fn new(renderer: R, config: NarrativeConfig) -> NarrativeResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            core: EngineCore::new(config),
        })
    }

    #[must_use]
    pub fn config(&self) -> &NarrativeConfig {
        &self.core.config
    }

    /// Builds the current frame without rendering it.
    #[must_use]
    pub fn build_frame(&self) -> NarrativeFrame {
        let (segments, markers) = match self.core.widgets.chart_viewport {
            Some(viewport) => match self.chart_projection(viewport) {
                Ok(projection) => (projection.segments, projection.markers),
                Err(err) => {
                    warn!(error = %err, "skipping chart projection for frame");
                    (Vec::new(), Vec::new())
                }
            },
            None => (Vec::new(), Vec::new()),
        };

        NarrativeFrame::new(self.active_year())
            .with_background(self.background_layers())
            .with_hud(self.hud_readout())
            .with_chart(segments, markers, self.chart_panel_open())
            .with_comparison(self.comparison_layout())
    }

    pub fn render(&mut self) -> NarrativeResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)?;
        self.emit_event(NarrativeEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
