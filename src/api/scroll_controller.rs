use tracing::trace;

use crate::core::{ScrollMetrics, compute_scroll_fraction, derive_active_year};
use crate::render::Renderer;

use super::{NarrativeEngine, NarrativeEvent};

impl<R: Renderer> NarrativeEngine<R> {
    /// Establishes the initial active year before any scroll event arrives.
    ///
    /// Also applies the responsive chart panel default for the mounted
    /// viewport height, as a resize would.
    pub fn mount(&mut self, metrics: ScrollMetrics) -> Option<i32> {
        self.core.scroll.mounted = true;
        self.core.scroll.last_metrics = metrics;
        self.on_resize(metrics.viewport_height);
        self.refresh_active_year()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.core.scroll.mounted
    }

    /// Handles one scroll event and returns the resulting active year.
    ///
    /// While the map preview is open the page is scroll-locked and events are
    /// ignored.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<i32> {
        if self.core.widgets.preview.is_open() {
            trace!("scroll ignored while preview is open");
            return self.core.scroll.active_year;
        }
        self.core.scroll.last_metrics = metrics;
        self.refresh_active_year()
    }

    #[must_use]
    pub fn active_year(&self) -> Option<i32> {
        self.core.scroll.active_year
    }

    /// Scroll fraction of the last observed scroll position.
    #[must_use]
    pub fn scroll_fraction(&self) -> f64 {
        compute_scroll_fraction(self.core.scroll.last_metrics)
    }

    #[must_use]
    pub fn last_scroll_metrics(&self) -> ScrollMetrics {
        self.core.scroll.last_metrics
    }

    pub(super) fn refresh_active_year(&mut self) -> Option<i32> {
        let previous = self.core.scroll.active_year;
        let current = derive_active_year(&self.core.model.records, self.core.scroll.last_metrics);
        if current != previous {
            trace!(?previous, ?current, "active year changed");
            self.core.scroll.active_year = current;
            self.emit_event(NarrativeEvent::ActiveYearChanged { previous, current });
        }
        current
    }
}
