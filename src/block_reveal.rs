//! Directional slide/fade entrance for a block of content.

use crate::{
    ease::EASE_SIGNATURE,
    error::RevealResult,
    tween::{Tween, TweenSpec},
    visibility::{AnimationContext, Bounds, Viewport, VisibilityTrigger},
};

/// Starting displacement along the entrance axis, in page units.
pub const BLOCK_OFFSET: f64 = 60.0;

const BLOCK_DURATION: f64 = 0.7;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Left,
    Right,
}

impl Direction {
    /// Initial (x, y) displacement for this entrance direction.
    fn initial_offset(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, BLOCK_OFFSET),
            Self::Left => (BLOCK_OFFSET, 0.0),
            Self::Right => (-BLOCK_OFFSET, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct BlockRevealSpec {
    pub delay: f64,
    pub direction: Direction,
}

impl Default for BlockRevealSpec {
    fn default() -> Self {
        Self {
            delay: 0.0,
            direction: Direction::Up,
        }
    }
}

impl BlockRevealSpec {
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BlockRevealFrame {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    /// The host must clip overflow while the entrance is in flight so the
    /// displaced content cannot disturb surrounding layout.
    pub clip_overflow: bool,
}

#[derive(Debug)]
pub struct BlockReveal {
    spec: BlockRevealSpec,
    trigger: VisibilityTrigger,
    tween: Tween,
    playing: bool,
}

impl BlockReveal {
    pub fn new(spec: BlockRevealSpec, ctx: AnimationContext) -> RevealResult<Self> {
        let mut tween_spec = TweenSpec::new(0.0, 1.0, BLOCK_DURATION)
            .with_delay(spec.delay)
            .with_ease(EASE_SIGNATURE);
        if ctx.reduced_motion() {
            tween_spec = tween_spec.collapsed();
        }
        Ok(Self {
            trigger: VisibilityTrigger::new(ctx.trigger_margin, true),
            spec,
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

    pub fn frame(&self) -> BlockRevealFrame {
        let progress = self.tween.value();
        let (x0, y0) = self.spec.direction.initial_offset();
        BlockRevealFrame {
            x: x0 * (1.0 - progress),
            y: y0 * (1.0 - progress),
            opacity: progress,
            clip_overflow: !self.tween.is_finished(),
        }
    }

    pub fn stop(&mut self) {
        self.tween.stop();
    }
}
