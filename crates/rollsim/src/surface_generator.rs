//! Procedural surfaces for the rolling-ball scene.
//!
//! Shapes (all heights in world units):
//! - Flat: constant height
//! - Incline: plane tilted along X and Z
//! - Waves: `amplitude * sin(kx) * cos(kz)` egg-crate
//! - Noise: fractal Perlin hills

use glam::Vec2;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::heightfield::HeightField;
use crate::serde_utils::{deserialize_xz, serialize_xz};

/// Height function sampled onto the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SurfaceShape {
    Flat {
        height: f32,
    },
    Incline {
        base: f32,
        /// Rise per unit X.
        slope_x: f32,
        /// Rise per unit Z.
        slope_z: f32,
    },
    Waves {
        amplitude: f32,
        wavelength: f32,
    },
    Noise {
        seed: u32,
        amplitude: f32,
        frequency: f64,
        octaves: usize,
    },
}

/// Configuration for surface generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Samples along X.
    pub width: usize,
    /// Samples along Z.
    pub depth: usize,
    pub cell_size: f32,
    /// World (x, z) the grid is centered on.
    #[serde(serialize_with = "serialize_xz", deserialize_with = "deserialize_xz")]
    pub center: Vec2,
    pub shape: SurfaceShape,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 41,
            depth: 41,
            cell_size: 0.5, // 20 x 20 world units
            center: Vec2::ZERO,
            shape: SurfaceShape::Waves {
                amplitude: 1.0,
                wavelength: 12.0,
            },
        }
    }
}

/// Build the height field described by `config`.
pub fn generate_surface(config: &SurfaceConfig) -> Result<HeightField, SurfaceError> {
    let origin =
        config.center + HeightField::centered_origin(config.width, config.depth, config.cell_size);
    let (w, d, cell) = (config.width, config.depth, config.cell_size);

    match &config.shape {
        SurfaceShape::Flat { height } => HeightField::flat(w, d, cell, origin, *height),
        SurfaceShape::Incline {
            base,
            slope_x,
            slope_z,
        } => {
            let center = config.center;
            HeightField::from_fn(w, d, cell, origin, |x, z| {
                base + slope_x * (x - center.x) + slope_z * (z - center.y)
            })
        }
        SurfaceShape::Waves {
            amplitude,
            wavelength,
        } => {
            // Zero wavelength collapses to flat rather than dividing by zero
            let k = if wavelength.abs() > f32::EPSILON {
                std::f32::consts::TAU / wavelength
            } else {
                0.0
            };
            HeightField::from_fn(w, d, cell, origin, |x, z| {
                amplitude * (k * x).sin() * (k * z).cos()
            })
        }
        SurfaceShape::Noise {
            seed,
            amplitude,
            frequency,
            octaves,
        } => {
            let fbm: Fbm<Perlin> = Fbm::new(*seed)
                .set_octaves((*octaves).clamp(1, Fbm::<Perlin>::MAX_OCTAVES))
                .set_frequency(*frequency);
            HeightField::from_fn(w, d, cell, origin, |x, z| {
                amplitude * fbm.get([x as f64, z as f64]) as f32
            })
        }
    }
}
