//! Rolling spheres on a height-field surface.
//!
//! A primary ball and any number of raindrop spheres fall under gravity and
//! collide with an immutable [`HeightField`]. Bodies never collide with each
//! other. One call to [`step`] advances every active body by one tick.
//!
//! # Example
//!
//! ```
//! use rollsim::{step, BodySet, HeightField, PhysicsParams, RainConfig, RigidSphere};
//! use glam::{Vec2, Vec3};
//!
//! let surface = HeightField::flat(21, 21, 1.0, Vec2::new(-10.0, -10.0), 0.0).unwrap();
//! let ball = RigidSphere::new(Vec3::new(0.0, 3.0, 0.0), 0.5);
//! let mut bodies = BodySet::new(ball, RainConfig::default(), surface.center());
//!
//! // Let it rain
//! bodies.toggle_rain();
//!
//! let params = PhysicsParams::default();
//! for _ in 0..600 {
//!     step(&mut bodies, &surface, &params, 1.0 / 60.0);
//! }
//!
//! assert!((bodies.ball().position.y - 0.5).abs() < 1e-3);
//! ```

pub mod bodies;
pub mod constants;
pub mod error;
pub mod heightfield;
pub mod params;
pub mod serde_utils;
pub mod sphere;
pub mod step;
pub mod surface_generator;

pub use bodies::{BodyHandle, BodySet, RainToggle};
pub use error::SurfaceError;
pub use glam::{Mat4, Quat, Vec2, Vec3};
pub use heightfield::{HeightField, SurfaceMeshData, SurfaceSample};
pub use params::{PhysicsParams, RainConfig};
pub use sphere::{RigidSphere, SphereState, SphereUpdate};
pub use step::{step, StepReport};
pub use surface_generator::{generate_surface, SurfaceConfig, SurfaceShape};
