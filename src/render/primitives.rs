use serde::{Deserialize, Serialize};

use crate::error::{NarrativeError, NarrativeResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from 8-bit channels (`#3b82f6` -> `rgb8(0x3b, 0x82, 0xf6)`).
    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    pub fn validate(self) -> NarrativeResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(NarrativeError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// One stacked map snapshot of the crossfading background.
///
/// Hosts animate `opacity` changes over `transition_ms`; the engine never
/// sequences the fade itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundLayer {
    pub year: i32,
    pub image_path: String,
    pub opacity: f64,
    pub transition_ms: u32,
}

impl BackgroundLayer {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn validate(&self) -> NarrativeResult<()> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(NarrativeError::InvalidData(format!(
                "background layer opacity for {} must be in [0, 1]",
                self.year
            )));
        }
        Ok(())
    }
}

/// Heads-up counters for the active year.
///
/// `None` fields render as blank text. A year without a matching record keeps
/// its year and leaves both counters blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudReadout {
    pub year: Option<i32>,
    pub deaths: Option<u32>,
    pub injured: Option<u32>,
}

impl HudReadout {
    #[must_use]
    pub fn is_blank(self) -> bool {
        self.year.is_none() && self.deaths.is_none() && self.injured.is_none()
    }

    #[must_use]
    pub fn year_text(self) -> String {
        blank_or(self.year)
    }

    #[must_use]
    pub fn deaths_text(self) -> String {
        blank_or(self.deaths)
    }

    #[must_use]
    pub fn injured_text(self) -> String {
        blank_or(self.injured)
    }
}

fn blank_or<T: ToString>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartSeriesKind {
    Injured,
    Deaths,
}

impl ChartSeriesKind {
    pub const ALL: [Self; 2] = [Self::Injured, Self::Deaths];

    #[must_use]
    pub fn stroke_color(self) -> Color {
        match self {
            Self::Injured => Color::rgb8(0x3b, 0x82, 0xf6),
            Self::Deaths => Color::rgb8(0xd9, 0x04, 0x29),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerEmphasis {
    /// Active year: filled dot with an expanding, fading ring.
    Pulsing,
    /// Every other year: small neutral dot.
    Neutral,
}

/// Radius of the filled dot of a pulsing marker.
pub const PULSING_MARKER_RADIUS_PX: f64 = 4.0;
/// Ring radius range animated around a pulsing marker.
pub const PULSING_RING_RADIUS_RANGE_PX: (f64, f64) = (8.0, 16.0);
/// Duration of one ring expansion.
pub const PULSING_RING_PERIOD_MS: u32 = 1_500;
pub const NEUTRAL_MARKER_RADIUS_PX: f64 = 2.0;

/// Expanding ring drawn around a pulsing marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseRing {
    pub radius_from_px: f64,
    pub radius_to_px: f64,
    pub period_ms: u32,
    pub color: Color,
}

/// Per-point chart marker in panel pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMarker {
    pub year: i32,
    pub series: ChartSeriesKind,
    pub value: u32,
    pub x: f64,
    pub y: f64,
    pub emphasis: MarkerEmphasis,
}

impl ChartMarker {
    #[must_use]
    pub fn radius_px(self) -> f64 {
        match self.emphasis {
            MarkerEmphasis::Pulsing => PULSING_MARKER_RADIUS_PX,
            MarkerEmphasis::Neutral => NEUTRAL_MARKER_RADIUS_PX,
        }
    }

    /// Pulsing markers take the series stroke, neutral markers are gray.
    #[must_use]
    pub fn fill_color(self) -> Color {
        match self.emphasis {
            MarkerEmphasis::Pulsing => self.series.stroke_color(),
            MarkerEmphasis::Neutral => Color::rgb8(0x55, 0x55, 0x55),
        }
    }

    /// Ring animation for the marker; `None` for neutral markers.
    #[must_use]
    pub fn pulse_ring(self) -> Option<PulseRing> {
        match self.emphasis {
            MarkerEmphasis::Pulsing => {
                let (radius_from_px, radius_to_px) = PULSING_RING_RADIUS_RANGE_PX;
                Some(PulseRing {
                    radius_from_px,
                    radius_to_px,
                    period_ms: PULSING_RING_PERIOD_MS,
                    color: self.series.stroke_color(),
                })
            }
            MarkerEmphasis::Neutral => None,
        }
    }

    pub fn validate(self) -> NarrativeResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(NarrativeError::InvalidData(
                "chart marker coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Line segment joining two adjacent chart points of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSegment {
    pub series: ChartSeriesKind,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl ChartSegment {
    pub fn validate(self) -> NarrativeResult<()> {
        if !self.x1.is_finite() || !self.y1.is_finite() || !self.x2.is_finite() || !self.y2.is_finite()
        {
            return Err(NarrativeError::InvalidData(
                "chart segment coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Geometry of the before/after comparison widget.
///
/// The "before" image sits in a clip box `clip_width_px` wide anchored at the
/// left edge, and is itself drawn `before_image_width_px` wide (the full
/// container width) so the reveal is a clip, never a rescale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonLayout {
    pub split_percent: f64,
    pub clip_width_px: f64,
    pub handle_left_px: f64,
    pub before_image_width_px: f64,
}

impl ComparisonLayout {
    pub fn validate(self) -> NarrativeResult<()> {
        if !(0.0..=100.0).contains(&self.split_percent) {
            return Err(NarrativeError::InvalidData(
                "comparison split percent must be in [0, 100]".to_owned(),
            ));
        }
        if !self.clip_width_px.is_finite()
            || !self.before_image_width_px.is_finite()
            || self.clip_width_px < 0.0
            || self.clip_width_px > self.before_image_width_px
        {
            return Err(NarrativeError::InvalidData(
                "comparison clip width must be within the container width".to_owned(),
            ));
        }
        Ok(())
    }
}
