use serde::{Deserialize, Serialize};

use crate::core::MapImageResolver;
use crate::error::{NarrativeError, NarrativeResult};

use super::validation::validate_narrative_config;

/// Public engine bootstrap configuration.
///
/// This type is serializable so hosts can ship presentation tuning as JSON
/// next to the record data instead of inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeConfig {
    #[serde(default = "default_crossfade_duration_ms")]
    pub crossfade_duration_ms: u32,
    #[serde(default = "default_chart_panel_breakpoint_px")]
    pub chart_panel_breakpoint_px: f64,
    #[serde(default = "default_initial_split_percent")]
    pub initial_split_percent: f64,
    #[serde(default = "default_comparison_before_year")]
    pub comparison_before_year: i32,
    #[serde(default = "default_comparison_after_year")]
    pub comparison_after_year: i32,
    #[serde(default = "default_gallery_excluded_years")]
    pub gallery_excluded_years: Vec<i32>,
    #[serde(default = "default_chart_horizontal_padding_px")]
    pub chart_horizontal_padding_px: f64,
    #[serde(default = "default_chart_value_padding")]
    pub chart_value_padding: f64,
    #[serde(default)]
    pub map_images: MapImageResolver,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            crossfade_duration_ms: default_crossfade_duration_ms(),
            chart_panel_breakpoint_px: default_chart_panel_breakpoint_px(),
            initial_split_percent: default_initial_split_percent(),
            comparison_before_year: default_comparison_before_year(),
            comparison_after_year: default_comparison_after_year(),
            gallery_excluded_years: default_gallery_excluded_years(),
            chart_horizontal_padding_px: default_chart_horizontal_padding_px(),
            chart_value_padding: default_chart_value_padding(),
            map_images: MapImageResolver::default(),
        }
    }
}

impl NarrativeConfig {
    /// Sets the background crossfade duration.
    #[must_use]
    pub fn with_crossfade_duration_ms(mut self, duration_ms: u32) -> Self {
        self.crossfade_duration_ms = duration_ms;
        self
    }

    /// Sets the viewport height under which the chart panel starts collapsed.
    #[must_use]
    pub fn with_chart_panel_breakpoint_px(mut self, breakpoint_px: f64) -> Self {
        self.chart_panel_breakpoint_px = breakpoint_px;
        self
    }

    /// Sets the initial divider position of the comparison widget.
    #[must_use]
    pub fn with_initial_split_percent(mut self, percent: f64) -> Self {
        self.initial_split_percent = percent;
        self
    }

    #[must_use]
    pub fn with_comparison_years(mut self, before_year: i32, after_year: i32) -> Self {
        self.comparison_before_year = before_year;
        self.comparison_after_year = after_year;
        self
    }

    #[must_use]
    pub fn with_gallery_excluded_years(mut self, years: Vec<i32>) -> Self {
        self.gallery_excluded_years = years;
        self
    }

    /// Sets chart projection padding: horizontal pixels and value-domain slack.
    #[must_use]
    pub fn with_chart_padding(mut self, horizontal_px: f64, value_padding: f64) -> Self {
        self.chart_horizontal_padding_px = horizontal_px;
        self.chart_value_padding = value_padding;
        self
    }

    #[must_use]
    pub fn with_map_images(mut self, resolver: MapImageResolver) -> Self {
        self.map_images = resolver;
        self
    }

    pub fn validate(&self) -> NarrativeResult<()> {
        validate_narrative_config(self)
    }

    /// Parses and validates a JSON config; missing fields take defaults.
    pub fn from_json_str(input: &str) -> NarrativeResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            NarrativeError::InvalidConfig(format!("failed to parse narrative config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> NarrativeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            NarrativeError::InvalidConfig(format!("failed to serialize narrative config: {e}"))
        })
    }
}

fn default_crossfade_duration_ms() -> u32 {
    700
}

fn default_chart_panel_breakpoint_px() -> f64 {
    768.0
}

fn default_initial_split_percent() -> f64 {
    50.0
}

fn default_comparison_before_year() -> i32 {
    2014
}

fn default_comparison_after_year() -> i32 {
    2024
}

fn default_gallery_excluded_years() -> Vec<i32> {
    vec![2015, 2023]
}

fn default_chart_horizontal_padding_px() -> f64 {
    30.0
}

fn default_chart_value_padding() -> f64 {
    50.0
}
