//! Optional host-facing hooks live here.
//!
//! Keep extensions decoupled from the derivation paths in `core`.

pub mod observers;

pub use observers::{NarrativeEvent, NarrativeObserver, ObserverContext};
