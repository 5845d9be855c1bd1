mod frame;
mod null_renderer;
mod primitives;

pub use frame::NarrativeFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    BackgroundLayer, ChartMarker, ChartSegment, ChartSeriesKind, Color, ComparisonLayout,
    HudReadout, MarkerEmphasis, NEUTRAL_MARKER_RADIUS_PX, PULSING_MARKER_RADIUS_PX,
    PULSING_RING_PERIOD_MS, PULSING_RING_RADIUS_RANGE_PX, PulseRing,
};

use crate::error::NarrativeResult;

/// Contract implemented by any presentation backend.
///
/// Backends receive a fully materialized `NarrativeFrame` so drawing code
/// stays isolated from scroll and drag state.
pub trait Renderer {
    fn render(&mut self, frame: &NarrativeFrame) -> NarrativeResult<()>;
}
