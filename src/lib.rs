//! narrative-rs: state engine for scroll-driven data presentations.
//!
//! Two independent engines live here. The narrative scroll engine derives a
//! single active year from the page scroll position and feeds it to the
//! background crossfade, the HUD counters and the chart highlight. The
//! comparison drag engine turns pointer/touch input into a clamped split
//! percent for a before/after image reveal.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{NarrativeConfig, NarrativeEngine};
pub use error::{NarrativeError, NarrativeResult};
