use vtween_core::{EaseKind, PlayStyle};
use vtween_test_fixtures::{configs, run_for, Recorder};

#[test]
fn every_config_fixture_parses() {
    for key in configs::keys() {
        configs::load(&key).unwrap_or_else(|err| panic!("{key}: {err:#}"));
    }
}

#[test]
fn manifest_entries_point_at_files() {
    for key in configs::keys() {
        let path = configs::path(&key).unwrap_or_else(|err| panic!("{key}: {err:#}"));
        assert!(path.is_file(), "{key}: {}", path.display());
    }
    assert!(configs::path("does-not-exist").is_err());
}

#[test]
fn defaults_apply_at_registration() {
    let mut s = configs::scheduler("paused-out-quad").expect("fixture");
    assert_eq!(s.config().capacity, 16);
    let id = s.tween_float(0.0, 1.0, |_| {}).id().unwrap();
    let t = s.get(id).unwrap();
    assert_eq!(t.ease(), EaseKind::OutQuad);
    assert!(t.is_paused());

    // later changes only reach later tweens
    s.defaults_mut().auto_play = true;
    let fresh = s.tween_float(0.0, 1.0, |_| {}).id().unwrap();
    assert!(!s.get(fresh).unwrap().is_paused());
    assert!(s.get(id).unwrap().is_paused());
}

#[test]
fn ping_pong_defaults_keep_finished_tweens() {
    let mut s = configs::scheduler("ping-pong-keep").expect("fixture");
    let rec = Recorder::new();
    let id = s.tween_float(0.0, 1.0, rec.setter()).id().unwrap();
    let t = s.get(id).unwrap();
    assert_eq!(t.play_style(), PlayStyle::PingPong);
    assert_eq!(t.duration(), 0.5);

    run_for(&mut s, 1.0, 0.25);
    let t = s.get(id).unwrap();
    assert!(t.is_completed());
    assert_eq!(rec.last(), Some(0.0));
}

#[test]
fn unknown_fixture_is_an_error() {
    assert!(configs::load("does-not-exist").is_err());
}
