use serde::{Deserialize, Serialize};

/// Keyboard keys the presentation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Other,
}

/// Collapsible chart panel pinned to the bottom of the viewport.
///
/// Small screens start collapsed; every resize re-applies that default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPanelState {
    open: bool,
    breakpoint_px: f64,
    compact: bool,
}

impl ChartPanelState {
    #[must_use]
    pub fn new(breakpoint_px: f64) -> Self {
        Self {
            open: true,
            breakpoint_px,
            compact: false,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Returns `true` when the last observed viewport is below the breakpoint.
    #[must_use]
    pub fn is_compact(self) -> bool {
        self.compact
    }

    /// Re-applies the responsive default for a viewport of `viewport_height`.
    pub fn on_resize(&mut self, viewport_height: f64) {
        self.compact = viewport_height < self.breakpoint_px;
        self.open = !self.compact;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Header clicks only toggle on compact viewports.
    ///
    /// Returns `true` when the panel state changed.
    pub fn on_header_click(&mut self) -> bool {
        if !self.compact {
            return false;
        }
        self.toggle();
        true
    }
}

/// Full-size preview of one map snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewOverlay {
    year: Option<i32>,
}

impl PreviewOverlay {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.year.is_some()
    }

    #[must_use]
    pub fn year(self) -> Option<i32> {
        self.year
    }

    pub fn open(&mut self, year: i32) {
        self.year = Some(year);
    }

    /// Returns `true` when an open preview was closed.
    pub fn close(&mut self) -> bool {
        self.year.take().is_some()
    }

    /// Escape closes an open preview; other keys are ignored.
    pub fn on_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape => self.close(),
            Key::Other => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartPanelState, Key, PreviewOverlay};

    #[test]
    fn header_click_is_ignored_on_tall_viewports() {
        let mut panel = ChartPanelState::new(768.0);
        panel.on_resize(900.0);
        assert!(!panel.on_header_click());
        assert!(panel.is_open());

        panel.on_resize(600.0);
        assert!(!panel.is_open());
        assert!(panel.on_header_click());
        assert!(panel.is_open());
    }

    #[test]
    fn escape_closes_preview() {
        let mut overlay = PreviewOverlay::default();
        assert!(!overlay.on_key(Key::Escape));
        overlay.open(2016);
        assert!(!overlay.on_key(Key::Other));
        assert!(overlay.on_key(Key::Escape));
        assert_eq!(overlay.year(), None);
    }
}
