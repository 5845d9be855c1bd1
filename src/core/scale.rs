use crate::error::{NarrativeError, NarrativeResult};

/// Linear mapping from a value domain onto a pixel range.
///
/// Used by the chart projection for both axes: the x axis maps year indices
/// onto the padded panel width, the y axis maps record values onto the panel
/// height (top = domain end).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> NarrativeResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(NarrativeError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Maps `value` into `[range_start, range_end]` proportionally.
    pub fn domain_to_range(self, value: f64, range_start: f64, range_end: f64) -> NarrativeResult<f64> {
        if !value.is_finite() {
            return Err(NarrativeError::InvalidData("value must be finite".to_owned()));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(NarrativeError::InvalidData(
                "pixel range must be finite".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(range_start + normalized * (range_end - range_start))
    }
}
