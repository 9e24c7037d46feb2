//! Word-stagger text entrance.
//!
//! The input string is split on whitespace; each word becomes one animated
//! unit that rises from fully below its clip box (110% of line height) to
//! neutral, delayed by `base + index * stagger`. Every unit except the last
//! renders a trailing non-breaking space so the line wraps like ordinary text
//! while each word stays individually clippable.

use crate::{
    ease::EASE_SIGNATURE,
    error::RevealResult,
    stagger::StaggerSchedule,
    tween::{Tween, TweenSpec},
    visibility::{AnimationContext, Bounds, Viewport, VisibilityTrigger},
};

pub const NBSP: char = '\u{00A0}';

/// Starting vertical offset, in percent of the unit's own height.
pub const WORD_HIDDEN_OFFSET_PCT: f64 = 110.0;

const WORD_DURATION: f64 = 0.5;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TextRevealSpec {
    pub text: String,
    pub delay: f64,
    pub stagger: f64,
    pub once: bool,
}

impl TextRevealSpec {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delay: 0.0,
            stagger: 0.04,
            once: true,
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }
}

/// Presentation attributes for one word unit on the current frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WordFrame {
    pub offset_pct: f64,
    pub revealed: bool,
}

#[derive(Debug)]
struct WordUnit {
    text: String,
    tween: Tween,
}

#[derive(Debug)]
pub struct TextReveal {
    spec: TextRevealSpec,
    ctx: AnimationContext,
    trigger: VisibilityTrigger,
    words: Vec<WordUnit>,
    playing: bool,
}

impl TextReveal {
    pub fn new(spec: TextRevealSpec, ctx: AnimationContext) -> RevealResult<Self> {
        let words = build_units(&spec, ctx)?;
        Ok(Self {
            trigger: VisibilityTrigger::new(ctx.trigger_margin, spec.once),
            spec,
            ctx,
            words,
            playing: false,
        })
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The split units with their joining NBSP already appended.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.text.as_str())
    }

    /// Computed per-word delays, exposed for the host's own scheduling needs.
    pub fn delays(&self) -> impl Iterator<Item = f64> + '_ {
        self.words.iter().map(|w| w.tween.spec().delay)
    }

    /// Feed a layout observation. With `once` the entrance arms permanently at
    /// the first sighting; without it, leaving the viewport resets the words
    /// to their hidden pose.
    pub fn observe(&mut self, element: Bounds, viewport: Viewport) -> RevealResult<()> {
        let visible = self.trigger.observe(element, viewport);
        if visible && !self.playing {
            self.playing = true;
        } else if !visible && self.playing && !self.spec.once {
            self.playing = false;
            self.words = build_units(&self.spec, self.ctx)?;
        }
        Ok(())
    }

    pub fn advance(&mut self, dt: f64) {
        if !self.playing {
            return;
        }
        for word in &mut self.words {
            word.tween.advance(dt);
        }
    }

    pub fn frame(&self) -> Vec<WordFrame> {
        self.words
            .iter()
            .map(|w| WordFrame {
                offset_pct: w.tween.value(),
                revealed: w.tween.value() < WORD_HIDDEN_OFFSET_PCT,
            })
            .collect()
    }

    /// Cancel all in-flight word tweens.
    pub fn stop(&mut self) {
        for word in &mut self.words {
            word.tween.stop();
        }
    }
}

fn build_units(spec: &TextRevealSpec, ctx: AnimationContext) -> RevealResult<Vec<WordUnit>> {
    let words: Vec<&str> = spec.text.split_whitespace().collect();
    let schedule = StaggerSchedule::new(words.len(), spec.delay, spec.stagger)?;

    words
        .iter()
        .zip(schedule.iter())
        .enumerate()
        .map(|(i, (word, delay))| {
            let mut text = (*word).to_string();
            if i + 1 < words.len() {
                text.push(NBSP);
            }
            let mut tween_spec = TweenSpec::new(WORD_HIDDEN_OFFSET_PCT, 0.0, WORD_DURATION)
                .with_delay(delay)
                .with_ease(EASE_SIGNATURE);
            if ctx.reduced_motion() {
                tween_spec = tween_spec.collapsed();
            }
            Ok(WordUnit {
                text,
                tween: Tween::new(tween_spec)?,
            })
        })
        .collect()
}
