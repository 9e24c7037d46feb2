//! Scroll-progress computation over an element's traversal of the viewport.

use crate::visibility::{Bounds, Viewport};

/// Progress of an element through the window from "top edge enters at the
/// viewport bottom" (0) to "bottom edge exits at the viewport top" (1).
/// Continuous and reversible; clamped outside the window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollWindow {
    pub element: Bounds,
}

impl ScrollWindow {
    pub fn new(element: Bounds) -> Self {
        Self { element }
    }

    pub fn progress(&self, viewport: Viewport) -> f64 {
        let span = viewport.height + self.element.height;
        if span <= 0.0 {
            return 0.0;
        }
        let travelled = viewport.bottom() - self.element.top;
        (travelled / span).clamp(0.0, 1.0)
    }
}

/// Linear map from progress in [0,1] to an output range.
pub fn map_range(progress: f64, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * progress.clamp(0.0, 1.0)
}
