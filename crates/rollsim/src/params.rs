//! Tunable simulation parameters.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DROP_RADIUS, DEFAULT_MAX_SPEED, DEFAULT_RAIN_AMOUNT, DEFAULT_RAIN_HALF_EXTENT,
    DEFAULT_RAIN_HEIGHT, DEFAULT_REST_SPEED, DEFAULT_RESTITUTION, DEFAULT_ROLLING_FRICTION,
    GRAVITY_MAGNITUDE,
};

/// Contact and integration parameters shared by every sphere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Gravity magnitude (m/s^2), applied along -Y.
    pub gravity: f32,
    /// Fraction of the normal impact speed kept after a bounce (0-1).
    pub restitution: f32,
    /// Bounces slower than this are absorbed (inelastic stop).
    pub rest_speed: f32,
    /// Keep tangential velocity on contact so bodies roll downhill.
    /// When false, bodies only bounce in place.
    pub rolling: bool,
    /// Rolling resistance; deceleration is `rolling_friction * gravity`.
    pub rolling_friction: f32,
    /// Speed cap (m/s).
    pub max_speed: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY_MAGNITUDE,
            restitution: DEFAULT_RESTITUTION,
            rest_speed: DEFAULT_REST_SPEED,
            rolling: true,
            rolling_friction: DEFAULT_ROLLING_FRICTION,
            max_speed: DEFAULT_MAX_SPEED,
        }
    }
}

/// How raindrops are spawned and retired.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Drops spawned per toggle.
    pub amount: usize,
    pub radius: f32,
    /// Drops spawn within `center ± spawn_half_extent` on X and Z.
    pub spawn_half_extent: f32,
    /// World Y drops are released from.
    pub spawn_height: f32,
    /// Minimum horizontal distance between spawn points. Zero only
    /// requires points to differ.
    pub min_separation: f32,
    /// Drops older than this many ticks are despawned. `None` keeps them
    /// until the rain is cleared.
    pub lifetime_ticks: Option<u32>,
    /// Seed for spawn placement.
    pub seed: u64,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            amount: DEFAULT_RAIN_AMOUNT,
            radius: DEFAULT_DROP_RADIUS,
            spawn_half_extent: DEFAULT_RAIN_HALF_EXTENT,
            spawn_height: DEFAULT_RAIN_HEIGHT,
            min_separation: 0.0,
            lifetime_ticks: None,
            seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: PhysicsParams = serde_json::from_str(r#"{ "restitution": 0.3 }"#).unwrap();
        assert_eq!(params.restitution, 0.3);
        assert_eq!(params.gravity, GRAVITY_MAGNITUDE);
        assert!(params.rolling);

        let rain: RainConfig = serde_json::from_str(r#"{ "lifetime_ticks": 120 }"#).unwrap();
        assert_eq!(rain.lifetime_ticks, Some(120));
        assert_eq!(rain.amount, DEFAULT_RAIN_AMOUNT);
    }
}
