//! Rolling sphere rigid body.
//!
//! Spheres are point masses with a radius: they fall under gravity, collide
//! with the height field only, and carry an orientation purely so a renderer
//! can show them rolling.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::constants::MIN_RADIUS;
use crate::heightfield::{HeightField, SurfaceSample};
use crate::params::PhysicsParams;

/// Lifecycle of a sphere. Only `Active` spheres are integrated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SphereState {
    /// Created but physics not yet enabled.
    #[default]
    Dormant,
    Active,
    /// Despawned; never integrated again.
    Removed,
}

/// What happened to a sphere during one update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SphereUpdate {
    /// Touching the surface after the update.
    pub in_contact: bool,
    /// Non-finite state was detected and reset.
    pub recovered: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RigidSphere {
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
    /// Visual rotation accumulated while rolling.
    pub orientation: Quat,
    state: SphereState,
    /// Ticks spent active.
    age: u32,
}

impl RigidSphere {
    /// Create a dormant sphere at rest.
    pub fn new(position: Vec3, radius: f32) -> Self {
        let radius = if radius.is_finite() {
            radius.abs().max(MIN_RADIUS)
        } else {
            MIN_RADIUS
        };
        Self {
            position,
            velocity: Vec3::ZERO,
            radius,
            orientation: Quat::IDENTITY,
            state: SphereState::Dormant,
            age: 0,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Dormant -> Active. Removed spheres stay removed.
    pub fn enable_physics(&mut self) {
        if self.state == SphereState::Dormant {
            self.state = SphereState::Active;
        }
    }

    pub fn remove(&mut self) {
        self.state = SphereState::Removed;
    }

    pub fn state(&self) -> SphereState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SphereState::Active
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn add_life(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    /// Lowest point of the sphere.
    pub fn bottom(&self) -> f32 {
        self.position.y - self.radius
    }

    /// Model transform: uniform scale by radius, then rotation, then translation.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.radius),
            self.orientation,
            self.position,
        )
    }

    /// Advance one tick against `surface`.
    ///
    /// 1. Gravity, speed cap, explicit Euler position step
    /// 2. Surface query at the new (x, z)
    /// 3. Contact: clamp onto the surface, bounce the normal velocity with
    ///    restitution, then either roll (friction on the tangential part) or
    ///    drop the tangential part entirely
    ///
    /// Never leaves the sphere below `height_at(x, z) + radius`.
    pub fn update(&mut self, surface: &HeightField, params: &PhysicsParams, dt: f32) -> SphereUpdate {
        if !self.is_active() {
            return SphereUpdate::default();
        }

        let mut recovered = false;
        if !self.is_finite() {
            self.recover(surface, surface.center());
            recovered = true;
        }
        let safe_xz = Vec2::new(self.position.x, self.position.z);

        self.velocity.y -= params.gravity * dt;
        self.velocity = self.velocity.clamp_length_max(params.max_speed);
        self.position += self.velocity * dt;

        let mut in_contact = false;
        if self.is_finite() {
            let sample = surface.sample(self.position.x, self.position.z);
            in_contact = self.resolve_contact(sample, params, dt);
        }

        // Bad params (NaN gravity, dt, ...) can still poison the state
        if !self.is_finite() {
            self.recover(surface, safe_xz);
            recovered = true;
            in_contact = true;
        }

        SphereUpdate {
            in_contact,
            recovered,
        }
    }

    /// Returns true if the sphere was touching the surface.
    fn resolve_contact(&mut self, sample: SurfaceSample, params: &PhysicsParams, dt: f32) -> bool {
        let floor = sample.height + self.radius;
        if self.position.y >= floor {
            return false;
        }
        self.position.y = floor;

        let n = sample.normal;
        let v_n = self.velocity.dot(n);
        if v_n < 0.0 {
            // Moving into the surface - bounce with restitution
            let bounce = -v_n * params.restitution;
            let new_v_n = if bounce < params.rest_speed { 0.0 } else { bounce };
            self.velocity += n * (new_v_n - v_n);
        }

        let v_n = self.velocity.dot(n);
        let tangential = self.velocity - n * v_n;

        if !params.rolling {
            self.velocity = n * v_n;
            return true;
        }

        let speed = tangential.length();
        if speed > 1e-6 {
            let decel = params.rolling_friction * params.gravity * dt;
            let new_speed = (speed - decel).max(0.0);
            let tangential = tangential * (new_speed / speed);
            self.velocity = n * v_n + tangential;
            self.roll(n, tangential, dt);
        }

        true
    }

    /// Rotate about `n x v_t` by the arc length travelled over the radius.
    fn roll(&mut self, normal: Vec3, tangential: Vec3, dt: f32) {
        let axis = normal.cross(tangential).normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        let angle = tangential.length() * dt / self.radius;
        self.orientation = (Quat::from_axis_angle(axis, angle) * self.orientation).normalize();
    }

    /// Zero the velocity and put the sphere back on the surface.
    ///
    /// Keeps the current horizontal position if it is finite, otherwise
    /// falls back to `fallback_xz`.
    pub fn recover(&mut self, surface: &HeightField, fallback_xz: Vec2) {
        let xz = if self.position.x.is_finite() && self.position.z.is_finite() {
            Vec2::new(self.position.x, self.position.z)
        } else if fallback_xz.is_finite() {
            fallback_xz
        } else {
            surface.center()
        };

        self.velocity = Vec3::ZERO;
        self.position = Vec3::new(xz.x, surface.height_at(xz.x, xz.y) + self.radius, xz.y);
        if !self.orientation.is_finite() {
            self.orientation = Quat::IDENTITY;
        }
    }
}
