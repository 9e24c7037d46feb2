//! Drives the hero-section components through a simulated scroll-and-time
//! session, the way the page layer would, and checks the visible outcomes.

use revealkit::{
    AnimationContext, Bounds, CounterSpec, CurveTracer, CurveTracerSpec, NumericCounter,
    ScrollParallax, ScrollParallaxSpec, StaggerGroup, StaggerGroupSpec, TextReveal,
    TextRevealSpec, Viewport,
};

const FRAME: f64 = 1.0 / 60.0;

fn viewport_at(scroll_top: f64) -> Viewport {
    Viewport::new(scroll_top, 900.0)
}

#[test]
fn hero_headline_reveals_word_by_word() {
    let mut headline = TextReveal::new(
        TextRevealSpec::new("Pushing intelligence to the")
            .with_delay(0.4)
            .with_stagger(0.05),
        AnimationContext::default(),
    )
    .unwrap();

    assert_eq!(headline.word_count(), 4);
    let delays: Vec<f64> = headline.delays().collect();
    assert_eq!(delays, vec![0.4, 0.45, 0.5, 0.55]);

    // Hero is on screen at load.
    headline.observe(Bounds::new(200.0, 120.0), viewport_at(0.0)).unwrap();

    // Just past the first word's delay: word 0 moving, word 3 still parked.
    let mut elapsed = 0.0;
    while elapsed < 0.45 {
        headline.advance(FRAME);
        elapsed += FRAME;
    }
    let frame = headline.frame();
    assert!(frame[0].offset_pct < 110.0);
    assert_eq!(frame[3].offset_pct, 110.0);

    // Run the entrance out completely.
    headline.advance(5.0);
    assert!(headline.frame().iter().all(|w| w.offset_pct == 0.0));
}

#[test]
fn curve_tracer_full_session() {
    let mut curve = CurveTracer::new(
        CurveTracerSpec::default().with_delay(1.6),
        AnimationContext::default(),
    )
    .unwrap();
    curve.observe(Bounds::new(400.0, 400.0), viewport_at(0.0));

    let initial = curve.frame();
    assert!(initial.ready);
    assert_eq!(initial.dash_offset, initial.path_length);

    // Inside the delay: nothing drawn yet.
    for _ in 0..60 {
        curve.advance(FRAME);
    }
    assert_eq!(curve.frame().dash_offset, curve.frame().path_length);
    assert!(!curve.frame().marker.visible);

    // Delay (1.6 s) plus duration (2.5 s) fully served.
    let mut offsets = Vec::new();
    for _ in 0..300 {
        curve.advance(FRAME);
        offsets.push(curve.frame().dash_offset);
    }
    assert!(offsets.windows(2).all(|w| w[1] <= w[0] + 1e-9));
    assert_eq!(curve.frame().dash_offset, 0.0);
    assert!(curve.frame().marker.visible);
    assert!(
        curve
            .frame()
            .decorations
            .iter()
            .all(|d| d.opacity > 0.0)
    );
}

#[test]
fn counters_land_exactly_on_their_targets() {
    let specs = [(120, "+"), (42, ""), (99, "%")];
    let mut counters: Vec<NumericCounter> = specs
        .iter()
        .map(|(target, suffix)| {
            NumericCounter::new(
                CounterSpec::new(*target).with_suffix(*suffix),
                AnimationContext::default(),
            )
            .unwrap()
        })
        .collect();

    // Stats section scrolls into view.
    for c in &mut counters {
        c.observe(Bounds::new(2100.0, 200.0), viewport_at(1500.0));
    }
    for _ in 0..200 {
        for c in &mut counters {
            c.advance(FRAME);
        }
    }

    assert_eq!(counters[0].text(), "120+");
    assert_eq!(counters[1].text(), "42");
    assert_eq!(counters[2].text(), "99%");
}

#[test]
fn feature_grid_staggers_in_after_scroll() {
    let mut grid = StaggerGroup::new(
        StaggerGroupSpec::default().with_stagger(0.08),
        6,
        AnimationContext::default(),
    )
    .unwrap();
    let grid_bounds = Bounds::new(3000.0, 600.0);

    // Above the fold: still hidden no matter how much time passes.
    grid.observe(grid_bounds, viewport_at(0.0));
    grid.advance(3.0);
    assert!(grid.frame().iter().all(|f| f.opacity == 0.0));

    // Scrolled to it: children come in by index.
    grid.observe(grid_bounds, viewport_at(2600.0));
    grid.advance(0.3);
    let frame = grid.frame();
    assert!(frame[0].opacity > frame[5].opacity);

    grid.advance(5.0);
    assert!(grid.frame().iter().all(|f| f.opacity == 1.0 && f.y == 0.0));
}

#[test]
fn parallax_follows_the_scroll_position_live() {
    let parallax = ScrollParallax::new(
        ScrollParallaxSpec { speed: 0.3 },
        Bounds::new(4000.0, 500.0),
    )
    .unwrap();

    let entering = parallax.offset(viewport_at(3100.0));
    let centered = parallax.offset(viewport_at(3800.0));
    let leaving = parallax.offset(viewport_at(4500.0));

    assert_eq!(entering, -30.0);
    assert_eq!(leaving, 30.0);
    assert!(entering < centered && centered < leaving);

    // Scrolling back up retraces the same offsets.
    assert_eq!(parallax.offset(viewport_at(3100.0)), entering);
}

#[test]
fn reduced_motion_session_reaches_final_state_in_one_frame() {
    let ctx = AnimationContext::reduced();
    let view = viewport_at(0.0);
    let bounds = Bounds::new(200.0, 300.0);

    let mut headline = TextReveal::new(TextRevealSpec::new("Do more with"), ctx).unwrap();
    let mut curve = CurveTracer::new(CurveTracerSpec::default(), ctx).unwrap();
    let mut counter = NumericCounter::new(CounterSpec::new(42), ctx).unwrap();

    headline.observe(bounds, view).unwrap();
    curve.observe(bounds, view);
    counter.observe(bounds, view);

    headline.advance(0.0);
    curve.advance(0.0);
    counter.advance(0.0);

    assert!(headline.frame().iter().all(|w| w.offset_pct == 0.0));
    assert_eq!(curve.frame().dash_offset, 0.0);
    assert_eq!(counter.display(), 42);
}
