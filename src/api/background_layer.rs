use indexmap::IndexMap;

use crate::core::{MapImageResolver, YearSeries};
use crate::render::{BackgroundLayer, Renderer};

use super::NarrativeEngine;

/// Presence flag per loaded year: `true` only for the active year.
///
/// The key set is fixed by the loaded series; only the flags change as the
/// active year moves.
#[must_use]
pub fn background_presence(series: &YearSeries, active_year: Option<i32>) -> IndexMap<i32, bool> {
    series
        .years()
        .map(|year| (year, Some(year) == active_year))
        .collect()
}

/// One fully opaque or fully transparent layer per loaded year.
#[must_use]
pub fn build_background_layers(
    series: &YearSeries,
    active_year: Option<i32>,
    resolver: &MapImageResolver,
    transition_ms: u32,
) -> Vec<BackgroundLayer> {
    background_presence(series, active_year)
        .into_iter()
        .map(|(year, present)| BackgroundLayer {
            year,
            image_path: resolver.resolve(year).to_owned(),
            opacity: if present { 1.0 } else { 0.0 },
            transition_ms,
        })
        .collect()
}

impl<R: Renderer> NarrativeEngine<R> {
    #[must_use]
    pub fn background_presence(&self) -> IndexMap<i32, bool> {
        background_presence(&self.core.model.records, self.core.scroll.active_year)
    }

    #[must_use]
    pub fn background_layers(&self) -> Vec<BackgroundLayer> {
        build_background_layers(
            &self.core.model.records,
            self.core.scroll.active_year,
            &self.core.config.map_images,
            self.core.config.crossfade_duration_ms,
        )
    }

    /// Map snapshot path for `year` using the configured asset table.
    #[must_use]
    pub fn map_image_path(&self, year: i32) -> &str {
        self.core.config.map_images.resolve(year)
    }
}
