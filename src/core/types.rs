use serde::{Deserialize, Serialize};

/// Pixel size of a drawing surface (chart panel, comparison container).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Viewport scroll signals sampled by the host on every scroll event.
///
/// All values are CSS pixels. `document_height` is the full scrollable
/// height of the page, `viewport_height` the visible window height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(scroll_top: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            document_height,
        }
    }

    /// Metrics of a page scrolled to the very top.
    #[must_use]
    pub fn at_top(viewport_height: f64, document_height: f64) -> Self {
        Self::new(0.0, viewport_height, document_height)
    }

    /// Scrollable distance, `document_height - viewport_height`.
    #[must_use]
    pub fn scroll_range(self) -> f64 {
        self.document_height - self.viewport_height
    }
}

impl Default for ScrollMetrics {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Horizontal extent of the comparison container in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f64,
    pub width: f64,
}

impl ContainerRect {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Returns `true` when the rectangle can be used to map pointer positions.
    ///
    /// A container that is not laid out yet reports a zero width.
    #[must_use]
    pub fn is_measurable(self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}
