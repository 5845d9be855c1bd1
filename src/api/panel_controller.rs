use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::Viewport;
use crate::interaction::Key;
use crate::render::Renderer;

use super::{NarrativeEngine, NarrativeEvent};

/// One thumbnail of the map gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub year: i32,
    pub image_path: String,
}

impl<R: Renderer> NarrativeEngine<R> {
    #[must_use]
    pub fn chart_panel_open(&self) -> bool {
        self.core.widgets.chart_panel.is_open()
    }

    /// Re-applies the responsive open/closed default for the new window height.
    pub fn on_resize(&mut self, viewport_height: f64) {
        let was_open = self.chart_panel_open();
        self.core.widgets.chart_panel.on_resize(viewport_height);
        let open = self.chart_panel_open();
        if open != was_open {
            debug!(viewport_height, open, "chart panel default changed on resize");
            self.emit_event(NarrativeEvent::ChartPanelToggled { open });
        }
    }

    /// Explicit toggle button.
    pub fn toggle_chart_panel(&mut self) -> bool {
        self.core.widgets.chart_panel.toggle();
        let open = self.chart_panel_open();
        self.emit_event(NarrativeEvent::ChartPanelToggled { open });
        open
    }

    /// Panel header click; only toggles on compact viewports.
    pub fn chart_header_click(&mut self) -> bool {
        if self.core.widgets.chart_panel.on_header_click() {
            let open = self.chart_panel_open();
            self.emit_event(NarrativeEvent::ChartPanelToggled { open });
        }
        self.chart_panel_open()
    }

    /// Sets the pixel size used when frames include the chart projection.
    pub fn set_chart_viewport(&mut self, viewport: Viewport) {
        self.core.widgets.chart_viewport = Some(viewport);
    }

    /// Loaded years minus the configured gallery exclusions.
    #[must_use]
    pub fn gallery_items(&self) -> Vec<GalleryItem> {
        let excluded = &self.core.config.gallery_excluded_years;
        self.core
            .model
            .records
            .years()
            .filter(|year| !excluded.contains(year))
            .map(|year| GalleryItem {
                year,
                image_path: self.map_image_path(year).to_owned(),
            })
            .collect()
    }

    #[must_use]
    pub fn preview_year(&self) -> Option<i32> {
        self.core.widgets.preview.year()
    }

    /// Opens the full-size preview for a loaded year.
    ///
    /// Returns `false` for years that are not loaded.
    pub fn open_preview(&mut self, year: i32) -> bool {
        if !self.core.model.records.contains_year(year) {
            trace!(year, "preview request for unknown year ignored");
            return false;
        }
        self.core.widgets.preview.open(year);
        self.emit_event(NarrativeEvent::PreviewOpened { year });
        true
    }

    pub fn close_preview(&mut self) -> bool {
        let closed = self.core.widgets.preview.close();
        if closed {
            self.emit_event(NarrativeEvent::PreviewClosed);
        }
        closed
    }

    /// Keyboard input; Escape closes an open preview.
    pub fn on_key(&mut self, key: Key) -> bool {
        let closed = self.core.widgets.preview.on_key(key);
        if closed {
            self.emit_event(NarrativeEvent::PreviewClosed);
        }
        closed
    }
}
