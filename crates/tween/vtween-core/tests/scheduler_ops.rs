use approx::assert_abs_diff_eq;
use vtween_core::{InterpolatorKind, Quat, RotationMode, Scheduler, Vec3};
use vtween_test_fixtures::{run_for, Counter, Recorder};

#[test]
fn unique_id_evicts_previous_holder() {
    let mut s = Scheduler::default();
    let a = s
        .tween_float(0.0, 1.0, |_| {})
        .unique_id("fade")
        .id()
        .unwrap();
    assert_eq!(s.find_unique("fade"), Some(a));

    let b = s
        .tween_float(1.0, 0.0, |_| {})
        .unique_id("fade")
        .id()
        .unwrap();
    assert!(!s.contains(a));
    assert!(s.contains(b));
    assert_eq!(s.find_unique("fade"), Some(b));
    assert_eq!(s.len(), 1);
}

#[test]
fn unique_id_is_released_on_completion() {
    let mut s = Scheduler::default();
    s.tween_float(0.0, 1.0, |_| {})
        .duration(0.5)
        .unique_id("pulse");
    run_for(&mut s, 0.5, 0.25);
    assert_eq!(s.find_unique("pulse"), None);
}

#[test]
fn tagged_bulk_operations_touch_only_their_group() {
    let mut s = Scheduler::default();
    let ui_a = Recorder::new();
    let ui_b = Recorder::new();
    let other = Recorder::new();
    s.tween_float(0.0, 1.0, ui_a.setter()).tag("ui");
    s.tween_float(0.0, 1.0, ui_b.setter()).tag("ui");
    let lone = s.tween_float(0.0, 1.0, other.setter()).id().unwrap();

    assert_eq!(s.pause_tagged("ui"), 2);
    run_for(&mut s, 0.5, 0.25);
    assert!(ui_a.is_empty());
    assert!(ui_b.is_empty());
    assert_eq!(other.len(), 2);

    assert_eq!(s.resume_tagged("ui"), 2);
    run_for(&mut s, 0.25, 0.25);
    assert_eq!(ui_a.values(), vec![0.25]);

    assert_eq!(s.remove_tagged("ui"), 2);
    assert_eq!(s.ids(), vec![lone]);
    assert_eq!(s.remove_tagged("ui"), 0);

    assert_eq!(s.complete_all(), 1);
    assert_eq!(other.last(), Some(1.0));
    assert!(s.is_empty());
}

#[test]
fn pause_all_then_resume_all() {
    let mut s = Scheduler::default();
    let rec = Recorder::new();
    s.tween_float(0.0, 1.0, rec.setter());
    s.tween_float(0.0, 1.0, |_| {});
    assert_eq!(s.pause_all(), 2);
    run_for(&mut s, 1.0, 0.25);
    assert!(rec.is_empty());
    assert_eq!(s.resume_all(), 2);
    run_for(&mut s, 1.0, 0.25);
    assert!(s.is_empty());
}

#[test]
fn callback_can_remove_a_neighbour_mid_pass() {
    let mut s = Scheduler::default();
    let first = s.tween_float(0.0, 1.0, |_| {}).id().unwrap();
    let victim_rec = Recorder::new();
    let victim = s.tween_float(0.0, 1.0, victim_rec.setter()).id().unwrap();
    let tail_rec = Recorder::new();
    let tail = s.tween_float(0.0, 1.0, tail_rec.setter()).id().unwrap();

    s.handle(first).on_start(move |ctx| ctx.remove(victim));
    s.update(0.25);

    assert!(victim_rec.is_empty());
    // the entry after the removed one is still stepped
    assert_eq!(tail_rec.values(), vec![0.25]);
    assert_eq!(s.ids(), vec![first, tail]);
}

#[test]
fn on_complete_can_spawn_a_follow_up() {
    let mut s = Scheduler::default();
    let follow = Recorder::new();
    let spawn = follow.clone();
    s.tween_float(0.0, 1.0, |_| {})
        .duration(0.5)
        .on_complete(move |ctx| {
            let rec = spawn.clone();
            ctx.defer(move |s| {
                s.tween_float(0.0, 1.0, rec.setter()).duration(0.5);
            });
        });

    run_for(&mut s, 0.5, 0.25);
    assert_eq!(s.len(), 1);
    // registered mid-pass and stepped with zero elapsed time
    assert_eq!(follow.values(), vec![0.0]);

    run_for(&mut s, 0.5, 0.25);
    assert!(s.is_empty());
    assert_eq!(follow.last(), Some(1.0));
}

#[test]
fn callbacks_can_drive_other_tweens() {
    let mut s = Scheduler::default();
    let rec = Recorder::new();
    let waiting = s
        .tween_float(0.0, 1.0, rec.setter())
        .auto_play(false)
        .id()
        .unwrap();
    s.tween_float(0.0, 1.0, |_| {})
        .duration(0.25)
        .on_complete(move |ctx| ctx.resume(waiting));

    run_for(&mut s, 0.25, 0.25);
    assert!(rec.is_empty());
    assert!(!s.get(waiting).unwrap().is_paused());
    run_for(&mut s, 0.25, 0.25);
    assert_eq!(rec.values(), vec![0.25]);
}

#[test]
fn mismatched_kind_yields_dead_handle() {
    let mut s = Scheduler::default();
    let handle = s
        .tween::<f32, f32>(InterpolatorKind::Vec3, 0.0, 1.0, |_| {})
        .duration(2.0)
        .tag("nope");
    assert_eq!(handle.id(), None);
    assert!(s.is_empty());
}

#[test]
fn text_tween_reveals_the_target() {
    let mut s = Scheduler::default();
    let rec = Recorder::new();
    s.tween_text("", "Hello", rec.setter()).duration(1.0);
    run_for(&mut s, 1.0, 0.25);
    assert_eq!(rec.values(), vec!["H", "He", "Hel", "Hello"]);
}

#[test]
fn snapped_float_tween() {
    let mut s = Scheduler::default();
    let rec = Recorder::new();
    s.tween_float(0.0, 10.0, rec.setter())
        .duration(1.0)
        .snap_interval(5.0);
    run_for(&mut s, 1.0, 0.25);
    // 2.5 and 7.5 sit on the half-way mark and round away from zero
    assert_eq!(rec.values(), vec![5.0, 5.0, 10.0, 10.0]);
}

#[test]
fn euler_tween_takes_the_short_way_by_default() {
    let mut s = Scheduler::default();
    let fast = Recorder::<Quat>::new();
    let slow = Recorder::<Quat>::new();
    s.tween_euler(Vec3::new(0.0, 350.0, 0.0), Vec3::new(0.0, 10.0, 0.0), fast.setter());
    s.tween_euler(Vec3::new(0.0, 350.0, 0.0), Vec3::new(0.0, 10.0, 0.0), slow.setter())
        .rotation_mode(RotationMode::Slow);
    run_for(&mut s, 0.5, 0.5);

    let at_zero = Quat::from_euler_degrees(Vec3::ZERO);
    let at_180 = Quat::from_euler_degrees(Vec3::new(0.0, 180.0, 0.0));
    assert_abs_diff_eq!(fast.last().unwrap().angle_between_degrees(at_zero), 0.0, epsilon = 0.1);
    assert_abs_diff_eq!(slow.last().unwrap().angle_between_degrees(at_180), 0.0, epsilon = 0.1);
}

#[test]
fn value_changed_fires_every_step() {
    let mut s = Scheduler::default();
    let changed = Counter::new();
    s.tween_vec3(Vec3::ZERO, Vec3::ONE, |_| {})
        .duration(1.0)
        .on_value_changed(changed.callback());
    run_for(&mut s, 0.5, 0.25);
    assert_eq!(changed.get(), 2);
    // overshoot fires it a second time on the final step
    run_for(&mut s, 0.5, 0.25);
    assert_eq!(changed.get(), 5);
}

#[test]
fn rewind_all_and_reset_all_reach_every_tween() {
    let mut s = Scheduler::default();
    let ui = Recorder::new();
    let other = Recorder::new();
    let ui_id = s
        .tween_float(0.0, 10.0, ui.setter())
        .auto_remove(false)
        .tag("ui")
        .id()
        .unwrap();
    let other_id = s
        .tween_float(0.0, 10.0, other.setter())
        .auto_remove(false)
        .id()
        .unwrap();

    run_for(&mut s, 0.5, 0.25);
    assert_eq!(s.rewind_tagged("ui"), 1);
    run_for(&mut s, 0.5, 0.25);
    assert_eq!(ui.values(), vec![2.5, 5.0, 2.5, 0.0]);
    assert!(s.get(ui_id).unwrap().is_paused());
    assert!(s.get(other_id).unwrap().is_completed());

    // one parked at the start, one finished at the end: each turns around
    assert_eq!(s.rewind_all(), 2);
    run_for(&mut s, 1.0, 0.25);
    assert_eq!(ui.last(), Some(10.0));
    assert_eq!(other.last(), Some(0.0));
    assert!(s.get(ui_id).unwrap().is_paused());
    assert!(!s.get(other_id).unwrap().is_completed());

    assert_eq!(s.reset_all(), 2);
    assert_eq!(ui.last(), Some(0.0));
    assert!(!s.get(ui_id).unwrap().is_locked());
    run_for(&mut s, 1.0, 0.25);
    assert!(s.get(ui_id).unwrap().is_completed());
    assert!(s.get(other_id).unwrap().is_completed());
    assert_eq!(ui.last(), Some(10.0));
    assert_eq!(other.last(), Some(10.0));
}

#[test]
fn complete_tagged_finishes_only_its_group() {
    let mut s = Scheduler::default();
    let rec = Recorder::new();
    let ui = s.tween_float(0.0, 10.0, rec.setter()).tag("ui").id().unwrap();
    let other = s.tween_float(0.0, 10.0, |_| {}).id().unwrap();
    s.update(0.25);

    assert_eq!(s.complete_tagged("ui"), 1);
    assert_eq!(rec.last(), Some(10.0));
    assert!(!s.contains(ui));
    assert!(s.contains(other));
    assert_eq!(s.complete_tagged("ui"), 0);
}
