//! Progressive draw-on of the asymptotic curve, with a marker riding the path
//! tip and a schedule of decoration fades around it.
//!
//! The stroke trick is the classic dash one: dash array = total length, dash
//! offset = `length * (1 - progress)`, so the visible portion grows from the
//! path start. The marker is placed with a point-at-length query each update
//! and only becomes visible once progress clears a near-zero epsilon, which
//! keeps a stray dot from sitting at the origin before the tween starts.

use crate::{
    ease::{Ease, EASE_SIGNATURE},
    error::{RevealError, RevealResult},
    path::PathGeometry,
    tween::{Tween, TweenSpec},
    visibility::{AnimationContext, Bounds, Viewport, VisibilityTrigger},
};
use kurbo::BezPath;

/// The fixed plane curve: an asymptotic approach to the limit at x = 445,
/// drawn in a 460x400 view box.
pub const ASYMPTOTIC_CURVE_D: &str =
    "M 0 375 C 118 370, 222 360, 312 335 C 375 310, 408 255, 428 175 C 436 135, 442 75, 445 12";

const MARKER_EPSILON: f64 = 0.01;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CurveTracerSpec {
    pub stroke_color: String,
    pub delay: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Default for CurveTracerSpec {
    fn default() -> Self {
        Self {
            stroke_color: "currentColor".to_string(),
            delay: 0.8,
            duration: 2.5,
            ease: EASE_SIGNATURE,
        }
    }
}

impl CurveTracerSpec {
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DecorationKind {
    GridLine,
    XAxis,
    YAxis,
    Asymptote,
    FillRegion,
    AxisTick,
    LimitLabel,
    AxisLabel,
}

/// Fade parameters for each decoration, offsets relative to the base delay.
/// Order-independent of the tracer itself.
const DECORATIONS: &[(DecorationKind, f64, f64, f64)] = &[
    // (kind, target opacity, duration, delay offset)
    (DecorationKind::GridLine, 0.08, 0.8, 0.1),
    (DecorationKind::XAxis, 0.25, 0.8, 0.1),
    (DecorationKind::YAxis, 0.15, 0.8, 0.1),
    (DecorationKind::Asymptote, 0.35, 0.8, 0.2),
    (DecorationKind::AxisTick, 0.2, 0.5, 0.3),
    (DecorationKind::FillRegion, 0.15, 1.2, 1.5),
    (DecorationKind::LimitLabel, 0.3, 0.5, 2.2),
    (DecorationKind::AxisLabel, 0.2, 0.5, 2.2),
];

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MarkerFrame {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DecorationFrame {
    pub kind: DecorationKind,
    pub opacity: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct CurveTracerFrame {
    /// False until geometry has been measured; the host should defer all
    /// stroke/marker writes while unset.
    pub ready: bool,
    pub path_length: f64,
    pub dash_offset: f64,
    pub marker: MarkerFrame,
    pub decorations: Vec<DecorationFrame>,
}

#[derive(Debug)]
struct Decoration {
    kind: DecorationKind,
    tween: Tween,
}

#[derive(Debug)]
pub struct CurveTracer {
    spec: CurveTracerSpec,
    path: BezPath,
    geometry: Option<PathGeometry>,
    trigger: VisibilityTrigger,
    progress: Tween,
    decorations: Vec<Decoration>,
    playing: bool,
}

impl CurveTracer {
    pub fn new(spec: CurveTracerSpec, ctx: AnimationContext) -> RevealResult<Self> {
        Self::with_path(spec, ctx, ASYMPTOTIC_CURVE_D)
    }

    /// Same component over a caller-supplied path. The path data is validated
    /// here; measurement still happens lazily on the first drive.
    pub fn with_path(spec: CurveTracerSpec, ctx: AnimationContext, d: &str) -> RevealResult<Self> {
        let path = BezPath::from_svg(d)
            .map_err(|e| RevealError::geometry(format!("unparsable path data: {e}")))?;
        if path.segments().next().is_none() {
            return Err(RevealError::geometry("path has no drawable segments"));
        }

        let mut progress_spec = TweenSpec::new(0.0, 1.0, spec.duration)
            .with_delay(spec.delay)
            .with_ease(spec.ease);
        if ctx.reduced_motion() {
            progress_spec = progress_spec.collapsed();
        }

        let decorations = DECORATIONS
            .iter()
            .map(|&(kind, opacity, duration, offset)| {
                let mut fade = TweenSpec::new(0.0, opacity, duration)
                    .with_delay(spec.delay + offset)
                    .with_ease(Ease::OutQuad);
                if ctx.reduced_motion() {
                    fade = fade.collapsed();
                }
                Ok(Decoration {
                    kind,
                    tween: Tween::new(fade)?,
                })
            })
            .collect::<RevealResult<Vec<_>>>()?;

        Ok(Self {
            // The tracer arms as soon as its container touches the viewport
            // edge; no anticipatory margin.
            trigger: VisibilityTrigger::new(0.0, true),
            progress: Tween::new(progress_spec)?,
            spec,
            path,
            geometry: None,
            decorations,
            playing: false,
        })
    }

    pub fn spec(&self) -> &CurveTracerSpec {
        &self.spec
    }

    /// Geometry may lag layout; retried on every drive until it sticks.
    fn ensure_geometry(&mut self) {
        if self.geometry.is_none() {
            self.geometry = PathGeometry::from_path(&self.path).ok();
        }
    }

    pub fn observe(&mut self, element: Bounds, viewport: Viewport) {
        self.ensure_geometry();
        if self.trigger.observe(element, viewport) {
            self.playing = true;
        }
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn advance(&mut self, dt: f64) {
        self.ensure_geometry();
        if !self.playing {
            return;
        }
        self.progress.advance(dt);
        for deco in &mut self.decorations {
            deco.tween.advance(dt);
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress.value()
    }

    /// Attach an observer to the raw progress value.
    pub fn subscribe_progress(
        &mut self,
        callback: impl FnMut(&f64) + 'static,
    ) -> crate::signal::SubscriptionId {
        self.progress.subscribe(callback)
    }

    pub fn unsubscribe_progress(&mut self, id: crate::signal::SubscriptionId) {
        self.progress.unsubscribe(id);
    }

    pub fn frame(&self) -> CurveTracerFrame {
        let decorations = self
            .decorations
            .iter()
            .map(|d| DecorationFrame {
                kind: d.kind,
                opacity: d.tween.value(),
            })
            .collect();

        let Some(geometry) = &self.geometry else {
            return CurveTracerFrame {
                ready: false,
                path_length: 0.0,
                dash_offset: 0.0,
                marker: MarkerFrame {
                    x: 0.0,
                    y: 0.0,
                    visible: false,
                },
                decorations,
            };
        };

        let length = geometry.length();
        let progress = self.progress.value();
        let tip = geometry.point_at(length * progress);

        CurveTracerFrame {
            ready: true,
            path_length: length,
            dash_offset: length * (1.0 - progress),
            marker: MarkerFrame {
                x: tip.x,
                y: tip.y,
                visible: progress > MARKER_EPSILON,
            },
            decorations,
        }
    }

    /// Cancel the progress tween and every decoration fade; all progress
    /// subscriptions are released and no callback fires afterwards.
    pub fn stop(&mut self) {
        self.progress.stop();
        for deco in &mut self.decorations {
            deco.tween.stop();
        }
    }
}
