//! Teardown contracts: once a tween is stopped or a subscription released,
//! no callback may fire again, ever.

use std::cell::RefCell;
use std::rc::Rc;

use revealkit::{
    AnimationContext, Bounds, CounterSpec, CurveTracer, CurveTracerSpec, NumericCounter,
    Repeat, Tween, TweenSpec, TweenStatus, Viewport, EASE_SIGNATURE,
};

fn tap(tween: &mut Tween) -> Rc<RefCell<Vec<f64>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    tween.subscribe(move |v| sink.borrow_mut().push(*v));
    log
}

#[test]
fn stop_mid_flight_freezes_visual_state() {
    let mut tween = Tween::new(
        TweenSpec::new(0.0, 100.0, 2.0).with_ease(EASE_SIGNATURE),
    )
    .unwrap();
    let log = tap(&mut tween);

    for _ in 0..30 {
        tween.advance(1.0 / 60.0);
    }
    let frozen_value = tween.value();
    let recorded = log.borrow().len();

    tween.stop();
    for _ in 0..120 {
        tween.advance(1.0 / 60.0);
    }

    assert_eq!(tween.status(), TweenStatus::Cancelled);
    assert_eq!(tween.value(), frozen_value);
    assert_eq!(log.borrow().len(), recorded);
}

#[test]
fn unsubscribe_alone_silences_only_that_observer() {
    let mut tween = Tween::new(TweenSpec::new(0.0, 1.0, 1.0)).unwrap();

    let kept = Rc::new(RefCell::new(0_usize));
    let dropped = Rc::new(RefCell::new(0_usize));
    {
        let kept = Rc::clone(&kept);
        tween.subscribe(move |_| *kept.borrow_mut() += 1);
    }
    let id = {
        let dropped = Rc::clone(&dropped);
        tween.subscribe(move |_| *dropped.borrow_mut() += 1)
    };

    tween.advance(0.25);
    tween.unsubscribe(id);
    tween.unsubscribe(id); // idempotent
    tween.advance(0.25);

    assert_eq!(*kept.borrow(), 2);
    assert_eq!(*dropped.borrow(), 1);
}

#[test]
fn repeating_tween_honors_cancellation_between_cycles() {
    let mut tween = Tween::new(
        TweenSpec::new(0.0, 1.0, 1.0).with_repeat(Repeat::Finite(5)),
    )
    .unwrap();
    let log = tap(&mut tween);

    tween.advance(2.5); // mid third cycle
    assert_eq!(tween.status(), TweenStatus::Playing);
    tween.stop();
    tween.advance(10.0);

    assert_eq!(tween.status(), TweenStatus::Cancelled);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn dropping_a_component_mid_animation_fires_nothing_afterwards() {
    let fired = Rc::new(RefCell::new(Vec::new()));

    let mut curve = CurveTracer::new(
        CurveTracerSpec::default().with_delay(0.0),
        AnimationContext::default(),
    )
    .unwrap();
    let sink = Rc::clone(&fired);
    curve.subscribe_progress(move |v| sink.borrow_mut().push(*v));

    curve.observe(Bounds::new(100.0, 300.0), Viewport::new(0.0, 900.0));
    curve.advance(0.5);
    let recorded = fired.borrow().len();
    assert!(recorded > 0);

    drop(curve);
    // The subscription lived inside the tween; nothing retains it now.
    assert_eq!(fired.borrow().len(), recorded);
}

#[test]
fn counter_target_swap_leaves_no_dangling_callbacks() {
    let mut counter = NumericCounter::new(
        CounterSpec::new(1000).with_duration(2.0),
        AnimationContext::default(),
    )
    .unwrap();
    counter.observe(Bounds::new(100.0, 100.0), Viewport::new(0.0, 900.0));
    counter.advance(1.0);
    let mid = counter.display();
    assert!(mid > 0 && mid < 1000);

    // Restart toward a new target from the currently displayed value.
    counter.set_target(5).unwrap();
    counter.advance(10.0);
    assert_eq!(counter.display(), 5);
}
