//! Viewport-visibility triggering.
//!
//! The "visible once" pattern is an explicit two-state machine rather than a
//! boolean flag: `Pending` until the guard passes, `Triggered` forever after
//! (when `once` is set). Geometry comes in as plain page-coordinate intervals
//! so the machine is testable without any layout engine behind it.

/// Vertical extent of an element in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The visible scroll window: current scroll offset and window height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, height: f64) -> Self {
        Self { scroll_top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.scroll_top + self.height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MotionPreference {
    #[default]
    Full,
    /// Collapse transitions to instantaneous state changes; never disable them.
    Reduced,
}

/// Configuration propagated from the composition root down to every component.
/// Deliberately a plain value, not ambient global state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationContext {
    pub motion: MotionPreference,
    /// Inset applied to the viewport before the visibility test, in page
    /// units. The trigger fires once the element is this far inside the edge.
    pub trigger_margin: f64,
}

impl Default for AnimationContext {
    fn default() -> Self {
        Self {
            motion: MotionPreference::Full,
            trigger_margin: 80.0,
        }
    }
}

impl AnimationContext {
    pub fn reduced() -> Self {
        Self {
            motion: MotionPreference::Reduced,
            ..Self::default()
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.motion == MotionPreference::Reduced
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    Pending,
    Triggered,
}

#[derive(Debug)]
pub struct VisibilityTrigger {
    state: TriggerState,
    margin: f64,
    once: bool,
}

impl VisibilityTrigger {
    pub fn new(margin: f64, once: bool) -> Self {
        Self {
            state: TriggerState::Pending,
            margin,
            once,
        }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn is_triggered(&self) -> bool {
        self.state == TriggerState::Triggered
    }

    /// Feed a layout observation. Returns the visibility signal the component
    /// should act on: with `once`, this latches true at the first sighting.
    pub fn observe(&mut self, element: Bounds, viewport: Viewport) -> bool {
        let visible = intersects_with_margin(element, viewport, self.margin);

        match self.state {
            TriggerState::Pending if visible => {
                self.state = TriggerState::Triggered;
                tracing::debug!(
                    element_top = element.top,
                    scroll_top = viewport.scroll_top,
                    "visibility trigger fired"
                );
                true
            }
            TriggerState::Pending => false,
            TriggerState::Triggered => self.once || visible,
        }
    }
}

fn intersects_with_margin(element: Bounds, viewport: Viewport, margin: f64) -> bool {
    let lo = viewport.scroll_top + margin;
    let hi = viewport.bottom() - margin;
    if hi <= lo {
        // Margin swallowed the whole window; fall back to the raw viewport.
        return element.bottom() > viewport.scroll_top && element.top < viewport.bottom();
    }
    element.bottom() > lo && element.top < hi
}
