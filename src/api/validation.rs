use crate::core::Viewport;
use crate::error::{NarrativeError, NarrativeResult};

use super::NarrativeConfig;

pub(super) fn validate_narrative_config(config: &NarrativeConfig) -> NarrativeResult<()> {
    if !config.chart_panel_breakpoint_px.is_finite() || config.chart_panel_breakpoint_px < 0.0 {
        return Err(NarrativeError::InvalidConfig(
            "chart panel breakpoint must be finite and >= 0".to_owned(),
        ));
    }

    if !config.initial_split_percent.is_finite()
        || !(0.0..=100.0).contains(&config.initial_split_percent)
    {
        return Err(NarrativeError::InvalidConfig(
            "initial split percent must be finite and in [0, 100]".to_owned(),
        ));
    }

    for (value, name) in [
        (
            config.chart_horizontal_padding_px,
            "chart_horizontal_padding_px",
        ),
        (config.chart_value_padding, "chart_value_padding"),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(NarrativeError::InvalidConfig(format!(
                "`{name}` must be finite and >= 0"
            )));
        }
    }

    config.map_images.validate()
}

/// Chart projection needs a drawable panel that is wider than its padding.
pub(super) fn validate_chart_viewport(viewport: Viewport, padding_px: f64) -> NarrativeResult<()> {
    if !viewport.is_valid() || f64::from(viewport.width) <= padding_px * 2.0 {
        return Err(NarrativeError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}
