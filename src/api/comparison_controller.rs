use tracing::trace;

use crate::core::ContainerRect;
use crate::interaction::{DragState, PointerSample};
use crate::render::{ComparisonLayout, Renderer};

use super::{NarrativeEngine, NarrativeEvent};

impl<R: Renderer> NarrativeEngine<R> {
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.core.widgets.comparison.state()
    }

    #[must_use]
    pub fn split_percent(&self) -> f64 {
        self.core.widgets.comparison.split_percent()
    }

    /// Primary button pressed inside the container: jump the divider to the
    /// pointer and keep dragging from there.
    pub fn comparison_pointer_down(&mut self, client_x: f64, rect: Option<ContainerRect>) {
        self.remember_container(rect);
        let was_dragging = self.core.widgets.comparison.is_dragging();
        let previous = self.split_percent();
        let applied = self
            .core
            .widgets
            .comparison
            .jump_and_drag(&PointerSample::pointer(client_x), rect);
        if applied.is_none() {
            trace!("comparison pointer down ignored: container not measurable");
            return;
        }
        self.emit_drag_transition(was_dragging, previous);
    }

    pub fn comparison_pointer_move(&mut self, client_x: f64, rect: Option<ContainerRect>) {
        self.comparison_move(&PointerSample::pointer(client_x), rect);
    }

    pub fn comparison_pointer_up(&mut self) {
        self.comparison_release();
    }

    /// Pointer left the container bounds; releases any captured drag.
    pub fn comparison_pointer_leave(&mut self) {
        self.comparison_release();
    }

    /// Touch contact started. Touch does not jump the divider; it only
    /// captures the drag.
    pub fn comparison_touch_start(&mut self) {
        let was_dragging = self.core.widgets.comparison.is_dragging();
        self.core.widgets.comparison.begin_drag();
        if !was_dragging {
            self.emit_event(NarrativeEvent::DragStarted);
        }
    }

    pub fn comparison_touch_move(&mut self, sample: &PointerSample, rect: Option<ContainerRect>) {
        self.comparison_move(sample, rect);
    }

    pub fn comparison_touch_end(&mut self) {
        self.comparison_release();
    }

    /// Current clip/handle geometry, `None` until a measurable container was
    /// observed.
    #[must_use]
    pub fn comparison_layout(&self) -> Option<ComparisonLayout> {
        self.core
            .widgets
            .comparison_container
            .map(|rect| comparison_layout(self.split_percent(), rect))
    }

    /// Records the container rectangle used for layout; ignores unmeasurable
    /// rectangles so the last known geometry stays in effect.
    pub fn set_comparison_container(&mut self, rect: ContainerRect) {
        self.remember_container(Some(rect));
    }

    #[must_use]
    pub fn comparison_image_paths(&self) -> (&str, &str) {
        let resolver = &self.core.config.map_images;
        (
            resolver.resolve(self.core.config.comparison_before_year),
            resolver.resolve(self.core.config.comparison_after_year),
        )
    }

    fn comparison_move(&mut self, sample: &PointerSample, rect: Option<ContainerRect>) {
        self.remember_container(rect);
        let previous = self.split_percent();
        if let Some(percent) = self.core.widgets.comparison.update_drag(sample, rect) {
            trace!(percent, "comparison split updated");
            if percent != previous {
                self.emit_event(NarrativeEvent::SplitChanged { percent });
            }
        }
    }

    fn comparison_release(&mut self) {
        if !self.core.widgets.comparison.is_dragging() {
            return;
        }
        self.core.widgets.comparison.end_drag();
        self.emit_event(NarrativeEvent::DragEnded);
    }

    fn emit_drag_transition(&mut self, was_dragging: bool, previous_percent: f64) {
        if !was_dragging {
            self.emit_event(NarrativeEvent::DragStarted);
        }
        let percent = self.split_percent();
        if percent != previous_percent {
            self.emit_event(NarrativeEvent::SplitChanged { percent });
        }
    }

    fn remember_container(&mut self, rect: Option<ContainerRect>) {
        if let Some(rect) = rect.filter(|rect| rect.is_measurable()) {
            self.core.widgets.comparison_container = Some(rect);
        }
    }
}

/// Derives clip and handle geometry from a split percent.
#[must_use]
pub fn comparison_layout(split_percent: f64, rect: ContainerRect) -> ComparisonLayout {
    let split_percent = if split_percent.is_finite() {
        split_percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let width = if rect.is_measurable() { rect.width } else { 0.0 };
    let offset = (width * split_percent / 100.0).min(width);
    ComparisonLayout {
        split_percent,
        clip_width_px: offset,
        handle_left_px: offset,
        before_image_width_px: width,
    }
}
