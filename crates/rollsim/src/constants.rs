//! Physical constants and default tuning for the rolling-sphere simulation.
//!
//! ## Units
//!
//! World units are meters and seconds. The surface is the XZ plane with +Y up.

/// Gravity acceleration magnitude (m/s^2), applied along -Y.
pub const GRAVITY_MAGNITUDE: f32 = 9.81;

/// Frame loop period in milliseconds (~60 Hz).
pub const TICK_PERIOD_MS: u64 = 16;

/// Simulation time step matching [`TICK_PERIOD_MS`].
pub const TICK_DT: f32 = TICK_PERIOD_MS as f32 / 1000.0;

// =============================================================================
// CONTACT RESPONSE
// =============================================================================

/// Fraction of the normal impact speed kept after a bounce.
pub const DEFAULT_RESTITUTION: f32 = 0.45;

/// Bounces slower than this (m/s) are absorbed so bodies come to rest.
pub const DEFAULT_REST_SPEED: f32 = 0.25;

/// Rolling resistance coefficient (deceleration = coeff * g while in contact).
pub const DEFAULT_ROLLING_FRICTION: f32 = 0.05;

/// Hard speed cap (m/s). Bounds per-tick travel to `MAX_SPEED * dt`.
pub const DEFAULT_MAX_SPEED: f32 = 50.0;

// =============================================================================
// BODIES
// =============================================================================

/// Radius of the primary ball.
pub const DEFAULT_BALL_RADIUS: f32 = 0.5;

/// Radius of a raindrop.
pub const DEFAULT_DROP_RADIUS: f32 = 0.25;

/// Number of raindrops spawned per rain toggle.
pub const DEFAULT_RAIN_AMOUNT: usize = 25;

/// Half side length of the square rain spawn area.
pub const DEFAULT_RAIN_HALF_EXTENT: f32 = 10.0;

/// Height raindrops are released from.
pub const DEFAULT_RAIN_HEIGHT: f32 = 5.0;

/// Smallest radius a sphere may have.
pub const MIN_RADIUS: f32 = 1e-3;
