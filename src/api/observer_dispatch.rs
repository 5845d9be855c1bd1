use tracing::{debug, warn};

use crate::extensions::{NarrativeEvent, NarrativeObserver, ObserverContext};
use crate::render::Renderer;

use super::NarrativeEngine;

impl<R: Renderer> NarrativeEngine<R> {
    /// Registers an observer. Observers with a duplicate id are rejected.
    ///
    /// Returns `true` when the observer was added.
    pub fn add_observer(&mut self, observer: Box<dyn NarrativeObserver>) -> bool {
        let id = observer.id().to_owned();
        if self.core.observers.iter().any(|existing| existing.id() == id) {
            warn!(observer_id = %id, "rejecting observer with duplicate id");
            return false;
        }
        debug!(observer_id = %id, "observer registered");
        self.core.observers.push(observer);
        true
    }

    /// Removes the observer registered under `id`.
    pub fn remove_observer(&mut self, id: &str) -> bool {
        let before = self.core.observers.len();
        self.core.observers.retain(|observer| observer.id() != id);
        before != self.core.observers.len()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.core.observers.len()
    }

    pub(super) fn observer_context(&self) -> ObserverContext {
        ObserverContext {
            active_year: self.core.scroll.active_year,
            records_len: self.core.model.records.len(),
            drag: self.core.widgets.comparison.state(),
            chart_panel_open: self.core.widgets.chart_panel.is_open(),
            preview_year: self.core.widgets.preview.year(),
        }
    }

    pub(super) fn emit_event(&mut self, event: NarrativeEvent) {
        if self.core.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.core.observers {
            observer.on_event(event, context);
        }
    }
}
