mod background_layer;
mod chart_highlight;
mod comparison_controller;
mod data_controller;
mod engine;
mod engine_config;
mod engine_core;
mod engine_snapshot;
mod hud_readout;
mod json_contract;
mod observer_dispatch;
mod panel_controller;
mod scroll_controller;
mod validation;

pub use background_layer::{background_presence, build_background_layers};
pub use chart_highlight::{ChartProjection, marker_emphasis, project_chart, series_value};
pub use comparison_controller::comparison_layout;
pub use engine::NarrativeEngine;
pub use engine_config::NarrativeConfig;
pub use engine_snapshot::NarrativeSnapshot;
pub use hud_readout::hud_readout;
pub use json_contract::{NARRATIVE_SNAPSHOT_JSON_SCHEMA_V1, NarrativeSnapshotJsonContractV1};
pub use panel_controller::GalleryItem;

pub use crate::extensions::{NarrativeEvent, NarrativeObserver, ObserverContext};
