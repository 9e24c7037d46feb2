//! Scroll-linked translation, the self-drawing rule, and the scroll hint.

use crate::{
    ease::{Ease, EASE_SIGNATURE},
    error::{RevealError, RevealResult},
    scroll::{map_range, ScrollWindow},
    tween::{Repeat, Tween, TweenSpec},
    visibility::{AnimationContext, Bounds, Viewport, VisibilityTrigger},
};

/// Scroll progress maps to `[-100 * speed, +100 * speed]` page units.
pub const PARALLAX_RANGE: f64 = 100.0;

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScrollParallaxSpec {
    pub speed: f64,
}

impl Default for ScrollParallaxSpec {
    fn default() -> Self {
        Self { speed: 0.3 }
    }
}

impl ScrollParallaxSpec {
    pub fn validate(&self) -> RevealResult<()> {
        if !self.speed.is_finite() {
            return Err(RevealError::validation("parallax speed must be finite"));
        }
        Ok(())
    }
}

/// Live, reversible translation tied to the element's traversal of the
/// viewport. Not a trigger: the offset tracks scroll position continuously.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScrollParallax {
    spec: ScrollParallaxSpec,
    window: ScrollWindow,
}

impl ScrollParallax {
    pub fn new(spec: ScrollParallaxSpec, element: Bounds) -> RevealResult<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            window: ScrollWindow::new(element),
        })
    }

    /// Layout moved; re-anchor the scroll window.
    pub fn track(&mut self, element: Bounds) {
        self.window = ScrollWindow::new(element);
    }

    pub fn offset(&self, viewport: Viewport) -> f64 {
        self.offset_at(self.window.progress(viewport))
    }

    pub fn offset_at(&self, progress: f64) -> f64 {
        map_range(
            progress,
            -PARALLAX_RANGE * self.spec.speed,
            PARALLAX_RANGE * self.spec.speed,
        )
    }
}

const LINE_DURATION: f64 = 0.8;

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct LineDrawSpec {
    pub delay: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LineDrawFrame {
    /// Horizontal scale, anchored at the left edge.
    pub scale_x: f64,
}

/// One-shot horizontal rule that draws itself from the left on visibility.
#[derive(Debug)]
pub struct LineDraw {
    trigger: VisibilityTrigger,
    tween: Tween,
    playing: bool,
}

impl LineDraw {
    pub fn new(spec: LineDrawSpec, ctx: AnimationContext) -> RevealResult<Self> {
        let mut tween_spec = TweenSpec::new(0.0, 1.0, LINE_DURATION)
            .with_delay(spec.delay)
            .with_ease(EASE_SIGNATURE);
        if ctx.reduced_motion() {
            tween_spec = tween_spec.collapsed();
        }
        Ok(Self {
            // The rule draws as soon as it touches the viewport edge; no
            // anticipatory margin.
            trigger: VisibilityTrigger::new(0.0, true),
            tween: Tween::new(tween_spec)?,
            playing: false,
        })
    }

    pub fn observe(&mut self, element: Bounds, viewport: Viewport) {
        if self.trigger.observe(element, viewport) {
            self.playing = true;
        }
    }

    pub fn advance(&mut self, dt: f64) {
        if self.playing {
            self.tween.advance(dt);
        }
    }

    pub fn frame(&self) -> LineDrawFrame {
        LineDrawFrame {
            scale_x: self.tween.value(),
        }
    }

    pub fn stop(&mut self) {
        self.tween.stop();
    }
}

const HINT_FADE_DELAY: f64 = 2.0;
const HINT_FADE_DURATION: f64 = 0.3;
const HINT_BOUNCE_DURATION: f64 = 2.0;
const HINT_BOUNCE_AMPLITUDE: f64 = 8.0;
/// The bounce runs a finite number of extra cycles, then rests. Intentional:
/// the hint stops pulling attention after a few beats.
const HINT_BOUNCE_REPEAT: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollHintFrame {
    pub opacity: f64,
    pub y: f64,
}

/// The hero's scroll indicator: fades in late, bobs a few times, settles.
/// Starts on mount; no visibility trigger.
#[derive(Debug)]
pub struct ScrollHint {
    fade: Tween,
    bounce: Tween,
}

impl ScrollHint {
    pub fn new(ctx: AnimationContext) -> RevealResult<Self> {
        let mut fade = TweenSpec::new(0.0, 1.0, HINT_FADE_DURATION).with_delay(HINT_FADE_DELAY);
        let mut bounce = TweenSpec::new(0.0, 1.0, HINT_BOUNCE_DURATION)
            .with_repeat(Repeat::Finite(HINT_BOUNCE_REPEAT));
        if ctx.reduced_motion() {
            fade = fade.collapsed();
            bounce = bounce.collapsed();
        }
        Ok(Self {
            fade: Tween::new(fade)?,
            bounce: Tween::new(bounce)?,
        })
    }

    pub fn advance(&mut self, dt: f64) {
        self.fade.advance(dt);
        self.bounce.advance(dt);
    }

    pub fn is_settled(&self) -> bool {
        self.fade.is_settled() && self.bounce.is_settled()
    }

    pub fn frame(&self) -> ScrollHintFrame {
        // Cycle position 0 -> 1 folds into a down-and-back excursion.
        let cycle = self.bounce.value();
        let fold = 1.0 - (2.0 * cycle - 1.0).abs();
        ScrollHintFrame {
            opacity: self.fade.value(),
            y: HINT_BOUNCE_AMPLITUDE * Ease::InOutSine.apply(fold),
        }
    }

    pub fn stop(&mut self) {
        self.fade.stop();
        self.bounce.stop();
    }
}
