use glam::Vec2;
use tilt_core::*;

const FRAME_MS: f64 = 16.0;

fn driver(width: f32, height: f32) -> TiltDriver<SimHost> {
    TiltDriver::new(TiltConfig::default(), SimHost::new(width, height))
}

#[test]
fn set_immediate_emits_without_a_frame() {
    let mut d = driver(200.0, 100.0);
    d.set_immediate(130.0, 60.0);

    let s = d.current();
    assert_eq!((s.x, s.y, s.target_x, s.target_y), (130.0, 60.0, 130.0, 60.0));
    assert_eq!(d.host().frame_requests(), 0);
    assert_eq!(d.host().applied().len(), 1);
    let p = d.host().last_applied().unwrap();
    assert_eq!(p.pointer_x, 65.0);
    assert_eq!(p.rotate_x, -3.0);
    assert_eq!(p.rotate_y, 2.5);
}

#[test]
fn pointer_bursts_schedule_a_single_frame() {
    let mut d = driver(300.0, 150.0);
    for i in 0..20 {
        d.set_target(i as f32 * 10.0, 40.0);
    }
    assert_eq!(d.host().frame_requests(), 1);
    assert!(d.has_pending_frame());
    // Events only move the target.
    assert!(d.host().applied().is_empty());
    assert_eq!(d.current().current(), Vec2::ZERO);
}

#[test]
fn leave_returns_to_center_and_releases() {
    let mut d = driver(300.0, 150.0);
    d.set_immediate(250.0, 20.0);
    d.to_center();
    assert_eq!(d.current().target(), Vec2::new(150.0, 75.0));
    assert!(!d.is_released());

    let mut frames = 0;
    while !d.is_released() {
        assert!(d.advance_frame(FRAME_MS), "loop stopped before release");
        frames += 1;
        assert!(frames < 500);
    }
    let s = d.current();
    assert!((s.x - 150.0).abs() < 0.6);
    assert!((s.y - 75.0).abs() < 0.6);

    // The engine keeps settling after the visual release.
    d.run_until_idle(FRAME_MS, 1_000);
    assert!(!d.engine().is_running());
    assert!(!d.has_pending_frame());
    let s = d.current();
    assert!((s.x - 150.0).abs() <= 0.05 && (s.y - 75.0).abs() <= 0.05);
}

#[test]
fn entrance_drifts_slower_than_tracking() {
    let mut entrance = driver(300.0, 150.0);
    entrance.play_entrance();
    assert_eq!(entrance.current().target(), Vec2::new(150.0, 75.0));
    assert_eq!(entrance.host().frame_requests(), 1);
    assert_eq!(entrance.host().applied().len(), 1);
    let start = entrance.host().applied()[0];
    assert_eq!(
        start,
        VisualParams::derive(Vec2::new(230.0, 60.0), Vec2::new(300.0, 150.0))
    );

    let mut tracking = driver(300.0, 150.0);
    tracking.set_immediate(230.0, 60.0);
    tracking.to_center();

    for _ in 0..10 {
        entrance.advance_frame(FRAME_MS);
        tracking.advance_frame(FRAME_MS);
    }
    let left = |d: &TiltDriver<SimHost>| d.current().distance_to_target();
    assert!(left(&entrance) > left(&tracking));
}

#[test]
fn entrance_hands_over_to_tracking() {
    let mut d = driver(300.0, 150.0);
    d.play_entrance();
    let until = d.engine().initial_until_ms().unwrap();
    assert_eq!(until, constants::INITIAL_DURATION_MS);

    d.host_mut().focused = true;
    while d.host().now_ms() < until + FRAME_MS {
        assert!(d.advance_frame(FRAME_MS));
    }
    assert_eq!(
        d.engine().tau_at(d.host().now_ms()),
        d.engine().config().tracking_tau_sec
    );
}

#[test]
fn cancel_drops_queued_frame_and_freezes_state() {
    let mut d = driver(300.0, 150.0);
    d.set_immediate(250.0, 20.0);
    d.to_center();
    d.advance_frame(FRAME_MS);
    d.advance_frame(FRAME_MS);
    let stale = d.host().queued_frame().unwrap();

    d.cancel();
    d.cancel();
    assert!(d.host().queued_frame().is_none());
    assert!(!d.has_pending_frame());

    let before = d.current();
    let emitted = d.host().applied().len();
    for _ in 0..30 {
        assert!(!d.advance_frame(FRAME_MS));
    }
    // A callback that was already in flight still finds the engine idle.
    let now = d.host().now_ms();
    d.on_frame(stale, now);
    assert_eq!(d.current(), before);
    assert_eq!(d.host().applied().len(), emitted);
}

#[test]
fn frame_from_before_cancel_does_not_touch_a_restarted_loop() {
    let mut d = driver(300.0, 150.0);
    d.set_target(200.0, 100.0);
    d.advance_frame(FRAME_MS);
    d.advance_frame(FRAME_MS);
    let stale = d.host().queued_frame().unwrap();

    d.cancel();
    d.set_target(10.0, 10.0);
    let live = d.host().queued_frame().unwrap();
    assert_ne!(stale, live);
    let requests = d.host().frame_requests();
    let before = d.current();
    let emitted = d.host().applied().len();

    // The cancelled callback fires late anyway.
    let now = d.host().now_ms();
    d.on_frame(stale, now);
    assert_eq!(d.host().frame_requests(), requests);
    assert_eq!(d.pending_frame(), Some(live));
    assert_eq!(d.host().queued_frame(), Some(live));
    assert_eq!(d.current(), before);
    assert_eq!(d.host().applied().len(), emitted);

    // The live request still drives the loop.
    assert!(d.advance_frame(FRAME_MS));
    assert_eq!(d.host().applied().len(), emitted + 1);
    assert!(d.engine().is_running());
}

#[test]
fn sim_host_refuses_a_second_queued_frame() {
    let mut host = SimHost::new(10.0, 10.0);
    let first = host.request_frame();
    assert!(first.is_some());
    assert_eq!(host.request_frame(), None);
    assert_eq!(host.frame_requests(), 1);
    assert_eq!(host.queued_frame(), first);

    host.cancel_frame(first.unwrap());
    assert!(host.request_frame().is_some());
    assert_eq!(host.frame_requests(), 2);
}

#[test]
fn focus_keeps_the_loop_scheduled() {
    let mut d = driver(300.0, 150.0);
    d.host_mut().focused = true;
    d.set_immediate(150.0, 75.0);
    d.set_target(150.0, 75.0);
    for _ in 0..100 {
        assert!(d.advance_frame(FRAME_MS));
    }
    assert!(d.engine().is_running());

    d.host_mut().focused = false;
    assert!(d.advance_frame(FRAME_MS));
    assert!(!d.engine().is_running());
    assert!(!d.advance_frame(FRAME_MS));
}

#[test]
fn restart_after_idle_does_not_jump() {
    let mut d = driver(300.0, 150.0);
    d.set_target(100.0, 100.0);
    d.run_until_idle(FRAME_MS, 1_000);
    assert!(!d.engine().is_running());

    d.host_mut().advance_clock(30_000.0);
    d.set_target(0.0, 0.0);
    let before = d.current().current();
    assert!(d.advance_frame(FRAME_MS));
    assert_eq!(d.current().current(), before);
    assert!(d.advance_frame(FRAME_MS));
    assert!(d.current().x < before.x);
}

#[test]
fn detached_surface_is_a_no_op() {
    let mut d = TiltDriver::new(TiltConfig::default(), SimHost::detached());
    d.set_immediate(10.0, 10.0);
    assert!(d.host().applied().is_empty());

    d.to_center();
    assert_eq!(d.host().frame_requests(), 0);
    assert_eq!(d.current().target(), Vec2::new(10.0, 10.0));

    d.set_target(40.0, 40.0);
    d.run_until_idle(FRAME_MS, 1_000);
    assert!(d.host().applied().is_empty());
    assert!(!d.engine().is_running());
}

#[test]
fn every_frame_emits_parameters() {
    let mut d = driver(200.0, 100.0);
    d.set_target(200.0, 100.0);
    let frames = d.run_until_idle(FRAME_MS, 1_000);
    assert!(frames > 1);
    assert_eq!(d.host().applied().len(), frames);
    let last = d.host().last_applied().unwrap();
    assert!(last.pointer_x > 99.9 && last.pointer_y > 99.9);
}
