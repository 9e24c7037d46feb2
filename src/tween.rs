use crate::{
    ease::Ease,
    error::{RevealError, RevealResult},
    signal::{Signal, SubscriptionId},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    None,
    /// Replay the span this many additional times after the first pass.
    Finite(u32),
}

impl Repeat {
    fn extra_passes(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Finite(n) => n,
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct TweenSpec {
    pub from: f64,
    pub to: f64,
    pub duration: f64, // seconds
    pub delay: f64,    // seconds
    pub ease: Ease,
    pub repeat: Repeat,
}

impl TweenSpec {
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            ease: Ease::Linear,
            repeat: Repeat::None,
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Reduced-motion rendition: same endpoints, no time spent getting there.
    pub fn collapsed(mut self) -> Self {
        self.duration = 0.0;
        self.delay = 0.0;
        self.repeat = Repeat::None;
        self
    }

    pub fn validate(&self) -> RevealResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(RevealError::validation("tween endpoints must be finite"));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(RevealError::validation(
                "tween duration must be finite and >= 0",
            ));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(RevealError::validation(
                "tween delay must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenStatus {
    /// Created, or still inside the delay window. Nothing emitted yet.
    Waiting,
    Playing,
    Finished,
    Cancelled,
}

/// A running interpolation. Owns its elapsed time and its subscriber list;
/// the host drives it by calling [`Tween::advance`] with frame deltas.
#[derive(Debug)]
pub struct Tween {
    spec: TweenSpec,
    elapsed: f64,
    value: f64,
    status: TweenStatus,
    signal: Signal<f64>,
}

impl Tween {
    pub fn new(spec: TweenSpec) -> RevealResult<Self> {
        spec.validate()?;
        Ok(Self {
            value: spec.from,
            spec,
            elapsed: 0.0,
            status: TweenStatus::Waiting,
            signal: Signal::new(),
        })
    }

    pub fn spec(&self) -> &TweenSpec {
        &self.spec
    }

    /// Last computed value; `spec.from` until the first active frame.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Normalized position of `value` between the endpoints.
    pub fn progress(&self) -> f64 {
        let span = self.spec.to - self.spec.from;
        if span == 0.0 {
            return if self.status == TweenStatus::Finished {
                1.0
            } else {
                0.0
            };
        }
        (self.value - self.spec.from) / span
    }

    pub fn status(&self) -> TweenStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == TweenStatus::Finished
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.status, TweenStatus::Finished | TweenStatus::Cancelled)
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&f64) + 'static) -> SubscriptionId {
        self.signal.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.signal.unsubscribe(id);
    }

    /// Cancel. Idempotent; releases every subscription so no callback can fire
    /// after this returns. A tween that already finished stays finished.
    pub fn stop(&mut self) {
        if self.status != TweenStatus::Finished {
            self.status = TweenStatus::Cancelled;
        }
        self.signal.clear();
    }

    /// Move time forward. Emits the current eased value to subscribers while
    /// active; on natural completion the final emitted value is exactly
    /// `spec.to`, with no rounding drift from the easing math.
    pub fn advance(&mut self, dt: f64) -> TweenStatus {
        if self.is_settled() {
            return self.status;
        }
        self.elapsed += dt.max(0.0);

        let active = self.elapsed - self.spec.delay;
        if active < 0.0 {
            self.status = TweenStatus::Waiting;
            return self.status;
        }

        let passes = 1.0 + f64::from(self.spec.repeat.extra_passes());
        let total = self.spec.duration * passes;
        if self.spec.duration <= 0.0 || active >= total {
            self.value = self.spec.to;
            self.status = TweenStatus::Finished;
            let v = self.value;
            self.signal.emit(&v);
            return self.status;
        }

        let local = (active / self.spec.duration).fract();
        let eased = self.spec.ease.apply(local);
        self.value = self.spec.from + (self.spec.to - self.spec.from) * eased;
        self.status = TweenStatus::Playing;
        let v = self.value;
        self.signal.emit(&v);
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tap(tween: &mut Tween) -> Rc<RefCell<Vec<f64>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        tween.subscribe(move |v| sink.borrow_mut().push(*v));
        log
    }

    #[test]
    fn nothing_emitted_during_delay_window() {
        let mut tween = Tween::new(TweenSpec::new(0.0, 1.0, 1.0).with_delay(0.5)).unwrap();
        let log = tap(&mut tween);

        assert_eq!(tween.advance(0.2), TweenStatus::Waiting);
        assert_eq!(tween.advance(0.2), TweenStatus::Waiting);
        assert!(log.borrow().is_empty());

        assert_eq!(tween.advance(0.2), TweenStatus::Playing);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn linear_midpoint() {
        let mut tween = Tween::new(TweenSpec::new(0.0, 10.0, 1.0)).unwrap();
        tween.advance(0.5);
        assert!((tween.value() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn terminal_value_is_exact() {
        let mut tween =
            Tween::new(TweenSpec::new(0.0, 42.0, 1.5).with_ease(crate::ease::EASE_SIGNATURE))
                .unwrap();
        let log = tap(&mut tween);
        let mut t = 0.0;
        while t < 2.0 {
            tween.advance(0.016);
            t += 0.016;
        }
        assert_eq!(tween.status(), TweenStatus::Finished);
        assert_eq!(tween.value(), 42.0);
        assert_eq!(*log.borrow().last().unwrap(), 42.0);
    }

    #[test]
    fn values_monotone_for_monotone_ease() {
        let mut tween =
            Tween::new(TweenSpec::new(0.0, 1.0, 1.0).with_ease(crate::ease::EASE_SIGNATURE))
                .unwrap();
        let log = tap(&mut tween);
        for _ in 0..100 {
            tween.advance(0.012);
        }
        let log = log.borrow();
        assert!(log.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn stop_silences_subscribers() {
        let mut tween = Tween::new(TweenSpec::new(0.0, 1.0, 1.0)).unwrap();
        let log = tap(&mut tween);
        tween.advance(0.3);
        let seen = log.borrow().len();

        tween.stop();
        tween.stop();
        assert_eq!(tween.status(), TweenStatus::Cancelled);
        assert_eq!(tween.advance(0.3), TweenStatus::Cancelled);
        assert_eq!(log.borrow().len(), seen);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let mut tween = Tween::new(TweenSpec::new(3.0, 9.0, 0.0)).unwrap();
        assert_eq!(tween.advance(0.0), TweenStatus::Finished);
        assert_eq!(tween.value(), 9.0);
    }

    #[test]
    fn finite_repeat_replays_then_finishes() {
        // duration 1, three extra passes: active span is 4 seconds total.
        let mut tween =
            Tween::new(TweenSpec::new(0.0, 1.0, 1.0).with_repeat(Repeat::Finite(3))).unwrap();
        tween.advance(1.5);
        assert_eq!(tween.status(), TweenStatus::Playing);
        assert!((tween.value() - 0.5).abs() < 1e-12);

        tween.advance(2.5);
        assert_eq!(tween.status(), TweenStatus::Finished);
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn collapsed_spec_finishes_on_first_advance() {
        let spec = TweenSpec::new(0.0, 5.0, 2.5)
            .with_delay(0.8)
            .with_repeat(Repeat::Finite(3))
            .collapsed();
        let mut tween = Tween::new(spec).unwrap();
        assert_eq!(tween.advance(0.0), TweenStatus::Finished);
        assert_eq!(tween.value(), 5.0);
    }

    #[test]
    fn invalid_specs_are_rejected() {
        assert!(Tween::new(TweenSpec::new(0.0, 1.0, f64::NAN)).is_err());
        assert!(Tween::new(TweenSpec::new(0.0, 1.0, -1.0)).is_err());
        assert!(Tween::new(TweenSpec::new(0.0, 1.0, 1.0).with_delay(-0.1)).is_err());
        assert!(Tween::new(TweenSpec::new(f64::INFINITY, 1.0, 1.0)).is_err());
    }
}
