//! Headless rolling ball demo.
//!
//! Runs the scene for a few seconds at the fixed tick rate, switching the
//! rain on and off, and logs frame statistics.
//!
//! Usage: `rolling-demo [config.json|config.yaml]` (set `RUST_LOG=info`).

use std::path::PathBuf;
use std::time::Duration;

use demo::app::{FrameScheduler, Key, PacedDriver};
use demo::scene::RecordingTarget;
use demo::{DemoConfig, Scene};

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match DemoConfig::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => DemoConfig::default(),
    };

    let scene = match Scene::from_config(&config) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Failed to build scene: {}", e);
            std::process::exit(1);
        }
    };

    let mut scheduler = FrameScheduler::new(scene, RecordingTarget::new())
        .with_period(config.tick_period())
        .with_stats_interval(config.stats_interval);
    scheduler.on_exposed(true);

    let driver = PacedDriver::for_scheduler(&scheduler);
    driver.run_for(&mut scheduler, Duration::from_secs(1));

    scheduler.handle_key(Key::I);
    driver.run_for(&mut scheduler, Duration::from_secs(3));

    scheduler.handle_key(Key::I);
    driver.run_for(&mut scheduler, Duration::from_secs(1));

    scheduler.shutdown();

    let ball = scheduler.scene().bodies.ball();
    log::info!(
        "Ball at ({:.3}, {:.3}, {:.3}), {} frames presented",
        ball.position.x,
        ball.position.y,
        ball.position.z,
        scheduler.target().frames_presented()
    );
}
