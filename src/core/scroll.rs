//! Scroll position to active-year derivation.
//!
//! The scrollable range is split into `count` equal-width bands and each band
//! maps to one record. There is no interpolation between years: the active
//! year changes exactly when the scroll fraction crosses a band boundary.

use crate::core::{ScrollMetrics, YearSeries};

/// Normalized scroll progress in `[0, 1]`.
///
/// Returns `0.0` when the document is not taller than the viewport, and for
/// non-finite inputs. Overscroll (elastic scrolling above the top or past the
/// bottom) is clamped into range.
#[must_use]
pub fn compute_scroll_fraction(metrics: ScrollMetrics) -> f64 {
    let range = metrics.scroll_range();
    if !range.is_finite() || range <= 0.0 || !metrics.scroll_top.is_finite() {
        return 0.0;
    }
    (metrics.scroll_top / range).clamp(0.0, 1.0)
}

/// Maps a scroll fraction to a record index in `[0, count - 1]`.
///
/// Computes `floor(fraction * count)` and clamps afterwards, so the last
/// index is reached once `fraction >= (count - 1) / count`. Returns `None`
/// only when `count == 0`.
#[must_use]
pub fn year_index_from_fraction(fraction: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let fraction = if fraction.is_nan() { 0.0 } else { fraction };
    let raw = (fraction * count as f64).floor();
    if raw <= 0.0 {
        return Some(0);
    }
    // Float-to-int casts saturate, so huge fractions land on the last index.
    Some((raw as usize).min(count - 1))
}

/// Returns the year in focus for the given scroll position.
///
/// `None` when the series is empty. The function is pure: identical inputs
/// always yield the same year.
#[must_use]
pub fn derive_active_year(series: &YearSeries, metrics: ScrollMetrics) -> Option<i32> {
    let fraction = compute_scroll_fraction(metrics);
    let index = year_index_from_fraction(fraction, series.len())?;
    series.get(index).map(|record| record.year)
}

#[cfg(test)]
mod tests {
    use super::{compute_scroll_fraction, year_index_from_fraction};
    use crate::core::ScrollMetrics;

    #[test]
    fn short_document_yields_zero_fraction() {
        assert_eq!(compute_scroll_fraction(ScrollMetrics::new(40.0, 900.0, 900.0)), 0.0);
        assert_eq!(compute_scroll_fraction(ScrollMetrics::new(40.0, 900.0, 600.0)), 0.0);
    }

    #[test]
    fn negative_and_nan_fractions_map_to_first_index() {
        assert_eq!(year_index_from_fraction(-0.3, 5), Some(0));
        assert_eq!(year_index_from_fraction(f64::NAN, 5), Some(0));
        assert_eq!(year_index_from_fraction(f64::INFINITY, 5), Some(4));
    }
}
