use crate::error::NarrativeResult;
use crate::render::{NarrativeFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_background_count: usize,
    pub last_marker_count: usize,
    pub last_active_year: Option<i32>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &NarrativeFrame) -> NarrativeResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_background_count = frame.background.len();
        self.last_marker_count = frame.chart_markers.len();
        self.last_active_year = frame.active_year;
        Ok(())
    }
}
