//! Demo configuration, loadable from JSON or YAML.

use std::path::Path;
use std::time::Duration;

use glam::Vec3;
use rollsim::constants::{DEFAULT_BALL_RADIUS, TICK_PERIOD_MS};
use rollsim::serde_utils::{deserialize_vec3, serialize_vec3};
use rollsim::{PhysicsParams, RainConfig, SurfaceConfig};
use serde::{Deserialize, Serialize};

use crate::app::camera::FlyCamera;

/// Primary ball placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    #[serde(serialize_with = "serialize_vec3", deserialize_with = "deserialize_vec3")]
    pub start: Vec3,
    pub radius: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            start: Vec3::new(0.0, 3.0, 0.0),
            radius: DEFAULT_BALL_RADIUS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    #[serde(serialize_with = "serialize_vec3", deserialize_with = "deserialize_vec3")]
    pub eye: Vec3,
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// World units per key press.
    pub step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let camera = FlyCamera::default();
        Self {
            eye: camera.position,
            fov_deg: camera.fov_y.to_degrees(),
            aspect: camera.aspect,
            near: camera.near,
            far: camera.far,
            step: camera.step,
        }
    }
}

impl CameraConfig {
    pub fn build(&self, target: Vec3) -> FlyCamera {
        let mut camera = FlyCamera::new();
        camera.look_at(self.eye, target, Vec3::Y);
        camera.perspective(self.fov_deg.to_radians(), self.aspect, self.near, self.far);
        camera.step = self.step;
        camera
    }
}

/// Everything the demo needs to build a [`crate::Scene`] and run it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub surface: SurfaceConfig,
    pub physics: PhysicsParams,
    pub rain: RainConfig,
    pub ball: BallConfig,
    pub camera: CameraConfig,
    /// Scheduler period in milliseconds.
    pub tick_ms: u64,
    /// Ticks between frame reports.
    pub stats_interval: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            physics: PhysicsParams::default(),
            rain: RainConfig::default(),
            ball: BallConfig::default(),
            camera: CameraConfig::default(),
            tick_ms: TICK_PERIOD_MS,
            stats_interval: 30,
        }
    }
}

impl DemoConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Save configuration to JSON file
    pub fn save_json(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn load_json(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Save configuration to YAML file
    pub fn save_yaml(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Load configuration from YAML file
    pub fn load_yaml(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&yaml)?;
        Ok(config)
    }

    /// Pick the format from the extension; anything but `.json` is YAML.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::load_json(path),
            _ => Self::load_yaml(path),
        }
    }
}
