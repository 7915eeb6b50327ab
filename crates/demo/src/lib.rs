//! Headless frame loop around the `rollsim` simulation: camera, uniforms,
//! drawables, input bindings and a fixed-period scheduler.

pub mod app;
pub mod config;
pub mod scene;

pub use config::DemoConfig;
pub use scene::Scene;
