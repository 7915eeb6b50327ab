//! Headless frame loop tests: scheduler lifecycle, stats cadence, input,
//! camera tracking and config files.

use std::path::PathBuf;

use demo::app::{FixedStepDriver, FrameScheduler, Key, SchedulerState};
use demo::config::BallConfig;
use demo::scene::{MeshKind, RecordingTarget};
use demo::{DemoConfig, Scene};
use rollsim::{SurfaceShape, Vec3};

const DT: f32 = 0.016;

fn scheduler(config: &DemoConfig) -> FrameScheduler<RecordingTarget> {
    let scene = Scene::from_config(config).unwrap();
    FrameScheduler::new(scene, RecordingTarget::new())
        .with_period(config.tick_period())
        .with_stats_interval(config.stats_interval)
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rolling-demo-{}-{}", std::process::id(), name))
}

// =============================================================================
// LIFECYCLE
// =============================================================================

#[test]
fn test_init_happens_once() {
    let mut sched = scheduler(&DemoConfig::default());
    sched.on_exposed(true);
    assert!(sched.scene().is_initialized());

    sched.on_exposed(true);
    sched.on_hidden();
    sched.on_exposed(true);
    assert_eq!(sched.state(), SchedulerState::Running);
    // Already initialized: a second init is refused
    assert!(!sched.scene_mut().init());
}

#[test]
fn test_paused_ticks_are_ignored() {
    let mut sched = scheduler(&DemoConfig::default());
    sched.on_exposed(true);
    FixedStepDriver::default().run(&mut sched, 10);
    let ball = sched.scene().bodies.ball().clone();
    let presented = sched.target().frames_presented();

    sched.on_exposed(false);
    assert_eq!(sched.state(), SchedulerState::Paused);
    assert_eq!(FixedStepDriver::default().run(&mut sched, 10), 0);
    assert_eq!(sched.scene().bodies.ball(), &ball);
    assert_eq!(sched.target().frames_presented(), presented);

    sched.on_exposed(true);
    assert_eq!(FixedStepDriver::default().run(&mut sched, 5), 5);
    assert_eq!(sched.target().frames_presented(), presented + 5);
}

#[test]
fn test_shutdown_is_final() {
    let mut sched = scheduler(&DemoConfig::default());
    sched.on_exposed(true);
    sched.shutdown();
    sched.on_exposed(true);
    assert_eq!(sched.state(), SchedulerState::Shutdown);
    assert!(sched.tick(DT).is_none());
}

// =============================================================================
// STATS
// =============================================================================

#[test]
fn test_frame_report_every_30_ticks() {
    let mut sched = scheduler(&DemoConfig::default());
    sched.on_exposed(true);

    let mut report_ticks = Vec::new();
    for i in 1..=95 {
        let outcome = sched.tick(DT).unwrap();
        if let Some(report) = outcome.report {
            assert!(report.fps > 0.0);
            assert_eq!(report.frames, i);
            report_ticks.push(i);
        }
    }
    assert_eq!(report_ticks, vec![30, 60, 90]);
}

// =============================================================================
// INPUT & RENDERING
// =============================================================================

#[test]
fn test_key_i_toggles_rain() {
    let mut sched = scheduler(&DemoConfig::default());
    sched.on_exposed(true);
    sched.tick(DT);
    assert_eq!(sched.target().last_frame().unwrap().count(MeshKind::Sphere), 1);

    sched.handle_key(Key::from_char('i'));
    // Applied at the next tick, not before
    assert_eq!(sched.scene().bodies.rain_count(), 0);
    sched.tick(DT);
    assert_eq!(sched.scene().bodies.rain_count(), 25);
    let frame = sched.target().last_frame().unwrap();
    assert_eq!(frame.count(MeshKind::Surface), 1);
    assert_eq!(frame.count(MeshKind::Sphere), 26);

    sched.handle_key(Key::I);
    sched.tick(DT);
    assert_eq!(sched.scene().bodies.rain_count(), 0);
    assert_eq!(sched.scene().drawable_count(), 2);
}

#[test]
fn test_camera_keys_and_follow() {
    let mut sched = scheduler(&DemoConfig::default());
    sched.on_exposed(true);
    let eye = sched.scene().camera.position;

    sched.handle_key(Key::W);
    sched.handle_key(Key::E);
    sched.handle_key(Key::Other);
    FixedStepDriver::default().run(&mut sched, 20);

    let scene = sched.scene();
    assert_eq!(scene.camera.position, eye + Vec3::new(0.0, 1.0, 1.0));
    assert_eq!(scene.camera.target, scene.bodies.ball().position);

    let frame = sched.target().last_frame().unwrap();
    assert_eq!(frame.view.camera_pos, scene.camera.position.to_array());
}

#[test]
fn test_ball_draw_matches_body() {
    let mut sched = scheduler(&DemoConfig::default());
    sched.on_exposed(true);
    FixedStepDriver::default().run(&mut sched, 40);

    let ball = sched.scene().bodies.ball().model_matrix();
    let frame = sched.target().last_frame().unwrap();
    let sphere = frame
        .draws
        .iter()
        .find(|d| d.mesh == MeshKind::Sphere)
        .unwrap();
    assert_eq!(sphere.model.model_matrix(), ball);
}

#[test]
fn test_ball_settles_on_flat_scene() {
    let mut config = DemoConfig::default();
    config.surface.shape = SurfaceShape::Flat { height: 1.0 };
    config.ball = BallConfig {
        start: Vec3::new(0.0, 4.0, 0.0),
        radius: 0.5,
    };
    let mut sched = scheduler(&config);
    sched.on_exposed(true);
    FixedStepDriver::default().run(&mut sched, 500);
    assert!((sched.scene().bodies.ball().position.y - 1.5).abs() < 1e-3);
}

// =============================================================================
// CONFIG FILES
// =============================================================================

#[test]
fn test_config_json_round_trip() {
    let mut config = DemoConfig::default();
    config.tick_ms = 20;
    config.rain.amount = 7;
    config.rain.lifetime_ticks = Some(300);
    config.ball.start = Vec3::new(1.0, 6.0, -2.0);

    let path = temp_path("config.json");
    config.save_json(&path).unwrap();
    let loaded = DemoConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
}

#[test]
fn test_config_yaml_round_trip() {
    let mut config = DemoConfig::default();
    config.surface.shape = SurfaceShape::Noise {
        seed: 3,
        amplitude: 1.5,
        frequency: 0.2,
        octaves: 5,
    };
    config.physics.rolling = false;

    let path = temp_path("config.yaml");
    config.save_yaml(&path).unwrap();
    let loaded = DemoConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
}

#[test]
fn test_partial_yaml_uses_defaults() {
    let path = temp_path("partial.yml");
    std::fs::write(&path, "tick_ms: 33\nrain:\n  amount: 4\n").unwrap();
    let loaded = DemoConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.tick_ms, 33);
    assert_eq!(loaded.rain.amount, 4);
    assert_eq!(loaded.stats_interval, 30);
    assert_eq!(loaded.surface, DemoConfig::default().surface);
}

#[test]
fn test_missing_config_is_an_error() {
    assert!(DemoConfig::load(&temp_path("missing.json")).is_err());
}
