//! Group-orchestrated child staggering.
//!
//! The group is a named-state machine: `Hidden` until its own region is seen,
//! `Visible` forever after. Children do not watch the viewport themselves;
//! they subscribe to the group state and each plays the shared item variant
//! with a delay of `group delay + index * stagger`. The variant is a plain
//! reusable value, deliberately independent of any particular group instance.

use crate::{
    ease::{Ease, EASE_SIGNATURE},
    error::RevealResult,
    stagger::StaggerSchedule,
    tween::{Tween, TweenSpec},
    visibility::{AnimationContext, Bounds, Viewport, VisibilityTrigger},
};

/// One keyframe pose of the item variant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemPose {
    pub opacity: f64,
    pub y: f64,
}

/// Hidden/visible keyframe pair plus timing, shared across all groups.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaggerItemVariant {
    pub hidden: ItemPose,
    pub visible: ItemPose,
    pub duration: f64,
    pub ease: Ease,
}

/// The page's stock item variant: fade in while rising 30 px.
pub const STAGGER_ITEM: StaggerItemVariant = StaggerItemVariant {
    hidden: ItemPose {
        opacity: 0.0,
        y: 30.0,
    },
    visible: ItemPose {
        opacity: 1.0,
        y: 0.0,
    },
    duration: 0.5,
    ease: EASE_SIGNATURE,
};

/// Groups use a shallower anticipatory inset than single blocks.
const GROUP_TRIGGER_MARGIN: f64 = 60.0;

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct StaggerGroupSpec {
    pub stagger: f64,
    pub delay: f64,
}

impl Default for StaggerGroupSpec {
    fn default() -> Self {
        Self {
            stagger: 0.06,
            delay: 0.0,
        }
    }
}

impl StaggerGroupSpec {
    pub fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum GroupState {
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ItemFrame {
    pub opacity: f64,
    pub y: f64,
}

#[derive(Debug)]
pub struct StaggerGroup {
    variant: StaggerItemVariant,
    trigger: VisibilityTrigger,
    state: GroupState,
    items: Vec<Tween>,
}

impl StaggerGroup {
    /// `child_count` fixes the schedule; children are identified by index.
    pub fn new(
        spec: StaggerGroupSpec,
        child_count: usize,
        ctx: AnimationContext,
    ) -> RevealResult<Self> {
        Self::with_variant(spec, child_count, STAGGER_ITEM, ctx)
    }

    pub fn with_variant(
        spec: StaggerGroupSpec,
        child_count: usize,
        variant: StaggerItemVariant,
        ctx: AnimationContext,
    ) -> RevealResult<Self> {
        let schedule = StaggerSchedule::new(child_count, spec.delay, spec.stagger)?;
        let items = schedule
            .iter()
            .map(|delay| {
                let mut tween_spec = TweenSpec::new(0.0, 1.0, variant.duration)
                    .with_delay(delay)
                    .with_ease(variant.ease);
                if ctx.reduced_motion() {
                    tween_spec = tween_spec.collapsed();
                }
                Tween::new(tween_spec)
            })
            .collect::<RevealResult<Vec<_>>>()?;

        Ok(Self {
            variant,
            trigger: VisibilityTrigger::new(GROUP_TRIGGER_MARGIN, true),
            state: GroupState::Hidden,
            items,
        })
    }

    pub fn state(&self) -> GroupState {
        self.state
    }

    pub fn child_count(&self) -> usize {
        self.items.len()
    }

    pub fn observe(&mut self, element: Bounds, viewport: Viewport) {
        if self.trigger.observe(element, viewport) && self.state == GroupState::Hidden {
            self.state = GroupState::Visible;
            tracing::debug!(children = self.items.len(), "stagger group visible");
        }
    }

    pub fn advance(&mut self, dt: f64) {
        if self.state != GroupState::Visible {
            return;
        }
        for item in &mut self.items {
            item.advance(dt);
        }
    }

    pub fn frame(&self) -> Vec<ItemFrame> {
        self.items
            .iter()
            .map(|item| {
                let t = item.value();
                ItemFrame {
                    opacity: lerp(self.variant.hidden.opacity, self.variant.visible.opacity, t),
                    y: lerp(self.variant.hidden.y, self.variant.visible.y, t),
                }
            })
            .collect()
    }

    pub fn stop(&mut self) {
        for item in &mut self.items {
            item.stop();
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
