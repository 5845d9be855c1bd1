use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ContainerRect;

mod panel;

pub use panel::{ChartPanelState, Key, PreviewOverlay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragMode {
    Idle,
    Dragging,
}

/// One active touch contact in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    #[must_use]
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Input coordinate carried by a pointer or touch event.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerSample {
    /// Mouse/pen event with its primary pointer coordinate.
    Pointer { client_x: f64 },
    /// Touch event with all active contacts, in platform order.
    Touch { touches: SmallVec<[TouchPoint; 2]> },
}

impl PointerSample {
    #[must_use]
    pub fn pointer(client_x: f64) -> Self {
        Self::Pointer { client_x }
    }

    #[must_use]
    pub fn touch(touches: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self::Touch {
            touches: touches.into_iter().collect(),
        }
    }

    /// Horizontal coordinate used for the divider.
    ///
    /// Touch events read the first active contact. A touch event without
    /// contacts carries no coordinate.
    #[must_use]
    pub fn client_x(&self) -> Option<f64> {
        match self {
            Self::Pointer { client_x } => Some(*client_x),
            Self::Touch { touches } => touches.first().map(|touch| touch.client_x),
        }
    }
}

/// Public drag state exposed to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub split_percent: f64,
    pub mode: DragMode,
}

impl DragState {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.mode == DragMode::Dragging
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            split_percent: 50.0,
            mode: DragMode::Idle,
        }
    }
}

/// Maps a client x coordinate to a clamped split percent.
///
/// Returns `None` when the container is not measurable or the coordinate is
/// not finite.
#[must_use]
pub fn split_percent_at(client_x: f64, rect: ContainerRect) -> Option<f64> {
    if !rect.is_measurable() || !client_x.is_finite() {
        return None;
    }
    let percent = ((client_x - rect.left) / rect.width) * 100.0;
    if percent.is_nan() {
        return None;
    }
    Some(percent.clamp(0.0, 100.0))
}

/// Before/after comparison drag engine.
///
/// `split_percent` only changes through `update_drag` while a drag is
/// captured, or through `jump_and_drag`, which captures a drag itself.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComparisonDrag {
    state: DragState,
}

impl ComparisonDrag {
    /// Creates an idle engine with the divider at `initial_split_percent`.
    #[must_use]
    pub fn new(initial_split_percent: f64) -> Self {
        let split_percent = if initial_split_percent.is_finite() {
            initial_split_percent.clamp(0.0, 100.0)
        } else {
            DragState::default().split_percent
        };
        Self {
            state: DragState {
                split_percent,
                mode: DragMode::Idle,
            },
        }
    }

    #[must_use]
    pub fn state(self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn split_percent(self) -> f64 {
        self.state.split_percent
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.state.is_dragging()
    }

    pub fn begin_drag(&mut self) {
        self.state.mode = DragMode::Dragging;
    }

    /// Moves the divider while a drag is captured.
    ///
    /// Returns the applied percent, or `None` when nothing changed (no drag in
    /// progress, container not measurable, or no usable coordinate).
    pub fn update_drag(&mut self, sample: &PointerSample, rect: Option<ContainerRect>) -> Option<f64> {
        if !self.is_dragging() {
            return None;
        }
        self.apply(sample, rect)
    }

    pub fn end_drag(&mut self) {
        self.state.mode = DragMode::Idle;
    }

    /// Jumps the divider to the sample position and captures a drag.
    ///
    /// Without a measurable container this is a no-op and no drag starts.
    pub fn jump_and_drag(&mut self, sample: &PointerSample, rect: Option<ContainerRect>) -> Option<f64> {
        let applied = self.apply(sample, rect)?;
        self.begin_drag();
        Some(applied)
    }

    fn apply(&mut self, sample: &PointerSample, rect: Option<ContainerRect>) -> Option<f64> {
        let percent = split_percent_at(sample.client_x()?, rect?)?;
        self.state.split_percent = percent;
        Some(percent)
    }
}
