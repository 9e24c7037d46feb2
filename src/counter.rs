//! Tweened integer readout: 0 up to a target once the element is seen.

use crate::{
    ease::EASE_SIGNATURE,
    error::RevealResult,
    tween::{Tween, TweenSpec, TweenStatus},
    visibility::{AnimationContext, Bounds, Viewport, VisibilityTrigger},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CounterSpec {
    pub target: i64,
    pub suffix: String,
    pub delay: f64,
    pub duration: f64,
}

impl CounterSpec {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            suffix: String::new(),
            delay: 0.0,
            duration: 1.5,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }
}

#[derive(Debug)]
pub struct NumericCounter {
    spec: CounterSpec,
    ctx: AnimationContext,
    trigger: VisibilityTrigger,
    tween: Tween,
    playing: bool,
}

impl NumericCounter {
    pub fn new(spec: CounterSpec, ctx: AnimationContext) -> RevealResult<Self> {
        let tween = Tween::new(build_spec(&spec, 0.0, ctx))?;
        Ok(Self {
            trigger: VisibilityTrigger::new(ctx.trigger_margin, true),
            spec,
            ctx,
            tween,
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

    /// Rounded interpolant; exactly `target` once the tween completes.
    pub fn display(&self) -> i64 {
        if self.tween.status() == TweenStatus::Finished {
            return self.spec.target;
        }
        self.tween.value().round() as i64
    }

    /// The readout the host renders, suffix included.
    pub fn text(&self) -> String {
        format!("{}{}", self.display(), self.spec.suffix)
    }

    pub fn is_finished(&self) -> bool {
        self.tween.is_finished()
    }

    /// Replace the target mid-flight: the old tween is stopped (its
    /// subscribers are released) and a fresh one continues from the value
    /// currently displayed.
    pub fn set_target(&mut self, target: i64) -> RevealResult<()> {
        let from = self.display() as f64;
        self.tween.stop();
        self.spec.target = target;
        let mut spec = build_spec(&self.spec, from, self.ctx);
        spec.delay = 0.0; // the entrance delay has already been served
        self.tween = Tween::new(spec)?;
        Ok(())
    }

    pub fn stop(&mut self) {
        self.tween.stop();
    }
}

fn build_spec(spec: &CounterSpec, from: f64, ctx: AnimationContext) -> TweenSpec {
    let mut tween_spec = TweenSpec::new(from, spec.target as f64, spec.duration)
        .with_delay(spec.delay)
        .with_ease(EASE_SIGNATURE);
    if ctx.reduced_motion() {
        tween_spec = tween_spec.collapsed();
    }
    tween_spec
}
