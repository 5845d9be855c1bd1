use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Viewport, YearRecord, YearSeries};
use crate::error::NarrativeResult;
use crate::render::{ChartMarker, ChartSegment, ChartSeriesKind, MarkerEmphasis, Renderer};

use super::NarrativeEngine;
use super::validation::validate_chart_viewport;

/// Projected chart geometry for both series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartProjection {
    pub segments: Vec<ChartSegment>,
    pub markers: Vec<ChartMarker>,
}

impl ChartProjection {
    /// Markers drawn with emphasis; one per series when the active year is
    /// plotted, none otherwise.
    pub fn emphasized(&self) -> impl Iterator<Item = &ChartMarker> {
        self.markers
            .iter()
            .filter(|marker| marker.emphasis == MarkerEmphasis::Pulsing)
    }
}

/// Per-point highlight predicate.
#[must_use]
pub fn marker_emphasis(year: i32, active_year: Option<i32>) -> MarkerEmphasis {
    if Some(year) == active_year {
        MarkerEmphasis::Pulsing
    } else {
        MarkerEmphasis::Neutral
    }
}

#[must_use]
pub fn series_value(record: &YearRecord, series: ChartSeriesKind) -> u32 {
    match series {
        ChartSeriesKind::Injured => record.injured,
        ChartSeriesKind::Deaths => record.deaths,
    }
}

/// Projects both series into panel pixel space.
///
/// Years are spread evenly across `[padding_px, width - padding_px]` (a
/// single year sits in the middle). Values share one domain over both
/// series, `[min - value_padding, max + value_padding]`, with larger values
/// drawn higher.
pub fn project_chart(
    series: &YearSeries,
    active_year: Option<i32>,
    viewport: Viewport,
    padding_px: f64,
    value_padding: f64,
) -> NarrativeResult<ChartProjection> {
    validate_chart_viewport(viewport, padding_px)?;
    if series.is_empty() {
        return Ok(ChartProjection::default());
    }

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let x_start = padding_px;
    let x_end = width - padding_px;
    let x_scale = if series.len() > 1 {
        Some(LinearScale::new(0.0, (series.len() - 1) as f64)?)
    } else {
        None
    };
    let y_scale = value_scale(series, value_padding)?;

    let mut projection = ChartProjection::default();
    for kind in ChartSeriesKind::ALL {
        let mut previous: Option<(f64, f64)> = None;
        for (index, record) in series.records().iter().enumerate() {
            let x = match x_scale {
                Some(scale) => scale.domain_to_range(index as f64, x_start, x_end)?,
                None => (x_start + x_end) / 2.0,
            };
            let value = series_value(record, kind);
            let y = y_scale.domain_to_range(f64::from(value), height, 0.0)?;

            if let Some((x1, y1)) = previous {
                projection.segments.push(ChartSegment {
                    series: kind,
                    x1,
                    y1,
                    x2: x,
                    y2: y,
                });
            }
            previous = Some((x, y));

            projection.markers.push(ChartMarker {
                year: record.year,
                series: kind,
                value,
                x,
                y,
                emphasis: marker_emphasis(record.year, active_year),
            });
        }
    }
    Ok(projection)
}

fn value_scale(series: &YearSeries, value_padding: f64) -> NarrativeResult<LinearScale> {
    let mut min = u32::MAX;
    let mut max = u32::MIN;
    for record in series.records() {
        for kind in ChartSeriesKind::ALL {
            let value = series_value(record, kind);
            min = min.min(value);
            max = max.max(value);
        }
    }

    let mut start = f64::from(min) - value_padding;
    let mut end = f64::from(max) + value_padding;
    if start == end {
        start -= 0.5;
        end += 0.5;
    }
    LinearScale::new(start, end)
}

impl<R: Renderer> NarrativeEngine<R> {
    /// Projects the loaded series into a chart panel of `viewport` size.
    pub fn chart_projection(&self, viewport: Viewport) -> NarrativeResult<ChartProjection> {
        project_chart(
            &self.core.model.records,
            self.core.scroll.active_year,
            viewport,
            self.core.config.chart_horizontal_padding_px,
            self.core.config.chart_value_padding,
        )
    }

    /// Emphasis of the marker for `year` under the current active year.
    #[must_use]
    pub fn chart_marker_emphasis(&self, year: i32) -> MarkerEmphasis {
        marker_emphasis(year, self.core.scroll.active_year)
    }
}
