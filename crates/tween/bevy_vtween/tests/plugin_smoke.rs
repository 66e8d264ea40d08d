use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_vtween::{PendingWrites, VTweenPlugin, VTweenScheduler};
use vtween_core::EaseKind;
use vtween_test_fixtures::configs;

fn app_with(plugin: VTweenPlugin) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(plugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(250)));
    app
}

#[test]
fn plugin_inserts_scheduler_resource() {
    let app = app_with(VTweenPlugin::default());
    // it should insert the scheduler and the write queue as non-send resources
    assert!(app.world().get_non_send_resource::<VTweenScheduler>().is_some());
    assert!(app.world().get_non_send_resource::<PendingWrites>().is_some());
}

#[test]
fn plugin_uses_config_defaults() {
    let cfg = configs::load("paused-out-quad").expect("fixture");
    let mut app = app_with(VTweenPlugin::from_config(cfg));

    let mut sched = app.world_mut().non_send_resource_mut::<VTweenScheduler>();
    let id = sched.0.tween_float(0.0, 1.0, |_| {}).id().unwrap();
    let t = sched.0.get(id).unwrap();
    assert_eq!(t.ease(), EaseKind::OutQuad);
    assert!(t.is_paused());
}

#[test]
fn translation_tween_reaches_target() {
    let mut app = app_with(VTweenPlugin::default());
    let entity = app.world_mut().spawn(Transform::default()).id();

    let pending = app.world().non_send_resource::<PendingWrites>().clone();
    app.world_mut()
        .non_send_resource_mut::<VTweenScheduler>()
        .0
        .tween_vec3(
            vtween_core::Vec3::ZERO,
            vtween_core::Vec3::new(1.0, 2.0, 3.0),
            pending.translation(entity),
        )
        .duration(1.0);

    // the first frame only primes the clock; give it plenty of headroom
    for _ in 0..10 {
        app.update();
    }

    let transform = app.world().get::<Transform>(entity).unwrap();
    assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
    assert!(app.world().non_send_resource::<VTweenScheduler>().0.is_empty());
    assert!(pending.is_empty());
}

#[test]
fn writes_for_despawned_entities_are_dropped() {
    let mut app = app_with(VTweenPlugin::default());
    let entity = app.world_mut().spawn(Transform::default()).id();
    let pending = app.world().non_send_resource::<PendingWrites>().clone();
    app.world_mut()
        .non_send_resource_mut::<VTweenScheduler>()
        .0
        .tween_euler(
            vtween_core::Vec3::ZERO,
            vtween_core::Vec3::new(0.0, 90.0, 0.0),
            pending.rotation(entity),
        )
        .duration(0.5);
    app.world_mut().despawn(entity);

    for _ in 0..5 {
        app.update();
    }
    assert!(pending.is_empty());
}
