//! Headless scroll- and viewport-triggered animation components.
//!
//! Each component owns its timing and interpolation state and emits plain
//! presentation attributes (offsets, opacities, stroke offsets, integers) for
//! a host page layer to write to its markup. The host drives every component
//! the same way: feed layout observations via `observe`, feed frame deltas
//! via `advance`, read the current `frame`.

#![forbid(unsafe_code)]

pub mod block_reveal;
pub mod counter;
pub mod curve_tracer;
pub mod ease;
pub mod error;
pub mod parallax;
pub mod path;
pub mod scroll;
pub mod signal;
pub mod stagger;
pub mod stagger_group;
pub mod text_reveal;
pub mod tween;
pub mod visibility;

pub use block_reveal::{BlockReveal, BlockRevealSpec, Direction};
pub use counter::{CounterSpec, NumericCounter};
pub use curve_tracer::{CurveTracer, CurveTracerSpec, ASYMPTOTIC_CURVE_D};
pub use ease::{Ease, EASE_SIGNATURE};
pub use error::{RevealError, RevealResult};
pub use parallax::{LineDraw, LineDrawSpec, ScrollHint, ScrollParallax, ScrollParallaxSpec};
pub use path::PathGeometry;
pub use scroll::ScrollWindow;
pub use signal::{Signal, SubscriptionId};
pub use stagger::StaggerSchedule;
pub use stagger_group::{StaggerGroup, StaggerGroupSpec, STAGGER_ITEM};
pub use text_reveal::{TextReveal, TextRevealSpec};
pub use tween::{Repeat, Tween, TweenSpec, TweenStatus};
pub use visibility::{AnimationContext, Bounds, MotionPreference, Viewport, VisibilityTrigger};
