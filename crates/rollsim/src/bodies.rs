//! The live set of simulated spheres: one primary ball plus raindrops.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::params::RainConfig;
use crate::sphere::{RigidSphere, SphereState};

/// Attempts at finding a free spawn point before giving up on a drop.
const MAX_SPAWN_ATTEMPTS: usize = 64;

/// Largest usable spawn half extent; the sampled range width `2 * half` must
/// stay finite.
const MAX_SPAWN_HALF_EXTENT: f32 = f32::MAX / 4.0;

/// Typed reference to a body in a [`BodySet`].
///
/// `Drop` carries the raindrop's spawn id. Ids are never reused, so a handle
/// to a cleared or expired drop resolves to `None` instead of another drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyHandle {
    Ball,
    Drop(u64),
}

/// Result of [`BodySet::toggle_rain`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RainToggle {
    Spawned(usize),
    Cleared(usize),
}

pub struct BodySet {
    ball: RigidSphere,
    rain: Vec<RigidSphere>,
    /// Spawn id of each drop in `rain`, ascending.
    rain_ids: Vec<u64>,
    next_drop_id: u64,
    rain_config: RainConfig,
    /// World (x, z) the rain spawn area is centered on.
    spawn_center: Vec2,
    rng: ChaCha8Rng,
}

impl BodySet {
    /// Create a set holding only `ball`. Physics is enabled on the ball.
    pub fn new(mut ball: RigidSphere, rain_config: RainConfig, spawn_center: Vec2) -> Self {
        ball.enable_physics();
        let rng = ChaCha8Rng::seed_from_u64(rain_config.seed);
        Self {
            ball,
            rain: Vec::new(),
            rain_ids: Vec::new(),
            next_drop_id: 0,
            rain_config,
            spawn_center,
            rng,
        }
    }

    pub fn ball(&self) -> &RigidSphere {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut RigidSphere {
        &mut self.ball
    }

    /// Raindrops in spawn order.
    pub fn rain(&self) -> &[RigidSphere] {
        &self.rain
    }

    pub fn rain_config(&self) -> &RainConfig {
        &self.rain_config
    }

    pub fn spawn_center(&self) -> Vec2 {
        self.spawn_center
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&RigidSphere> {
        match handle {
            BodyHandle::Ball => Some(&self.ball),
            BodyHandle::Drop(id) => self.drop_index(id).map(|i| &self.rain[i]),
        }
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidSphere> {
        match handle {
            BodyHandle::Ball => Some(&mut self.ball),
            BodyHandle::Drop(id) => self.drop_index(id).map(|i| &mut self.rain[i]),
        }
    }

    /// Handles of the live raindrops in spawn order.
    pub fn rain_handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.rain_ids.iter().map(|&id| BodyHandle::Drop(id))
    }

    fn drop_index(&self, id: u64) -> Option<usize> {
        self.rain_ids.binary_search(&id).ok()
    }

    /// Ball first, then raindrops in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &RigidSphere)> {
        std::iter::once((BodyHandle::Ball, &self.ball)).chain(
            self.rain_ids
                .iter()
                .zip(&self.rain)
                .map(|(&id, drop)| (BodyHandle::Drop(id), drop)),
        )
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut RigidSphere)> {
        std::iter::once((BodyHandle::Ball, &mut self.ball)).chain(
            self.rain_ids
                .iter()
                .zip(&mut self.rain)
                .map(|(&id, drop)| (BodyHandle::Drop(id), drop)),
        )
    }

    /// Ball plus raindrops.
    pub fn len(&self) -> usize {
        1 + self.rain.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn rain_count(&self) -> usize {
        self.rain.len()
    }

    pub fn has_rain(&self) -> bool {
        !self.rain.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.iter().filter(|(_, body)| body.is_active()).count()
    }

    /// Append `count` active raindrops at distinct random points of the spawn
    /// area, released at rest from `spawn_height`.
    ///
    /// If no free point can be found the remaining drops are skipped.
    pub fn spawn_rain(&mut self, count: usize) -> Vec<BodyHandle> {
        let mut handles = Vec::with_capacity(count);

        for i in 0..count {
            let Some(xz) = self.pick_spawn_point() else {
                log::debug!(
                    "Rain spawn area exhausted: placed {} of {} drops",
                    i,
                    count
                );
                break;
            };

            let position = Vec3::new(xz.x, self.rain_config.spawn_height, xz.y);
            let mut drop = RigidSphere::new(position, self.rain_config.radius);
            drop.enable_physics();
            let id = self.next_drop_id;
            self.next_drop_id += 1;
            self.rain.push(drop);
            self.rain_ids.push(id);

            log::debug!("Spawned raindrop {} at {:?}", id, position);
            handles.push(BodyHandle::Drop(id));
        }

        handles
    }

    /// Remove every raindrop. Returns how many were removed.
    pub fn clear_rain(&mut self) -> usize {
        let removed = self.rain.len();
        self.rain.clear();
        self.rain_ids.clear();
        removed
    }

    /// Clear the rain if any is falling, otherwise spawn the configured amount.
    pub fn toggle_rain(&mut self) -> RainToggle {
        if self.has_rain() {
            RainToggle::Cleared(self.clear_rain())
        } else {
            let amount = self.rain_config.amount;
            RainToggle::Spawned(self.spawn_rain(amount).len())
        }
    }

    /// Despawn drops that reached the configured lifetime.
    pub fn expire_rain(&mut self) -> usize {
        let Some(lifetime) = self.rain_config.lifetime_ticks else {
            return 0;
        };

        let before = self.rain.len();
        for drop in self.rain.iter_mut().filter(|d| d.age() >= lifetime) {
            drop.remove();
        }
        let (ids, drops): (Vec<u64>, Vec<RigidSphere>) = std::mem::take(&mut self.rain_ids)
            .into_iter()
            .zip(std::mem::take(&mut self.rain))
            .filter(|(_, d)| d.state() != SphereState::Removed)
            .unzip();
        self.rain_ids = ids;
        self.rain = drops;
        before - self.rain.len()
    }

    fn pick_spawn_point(&mut self) -> Option<Vec2> {
        let half = if self.rain_config.spawn_half_extent.is_finite() {
            self.rain_config
                .spawn_half_extent
                .abs()
                .min(MAX_SPAWN_HALF_EXTENT)
        } else {
            0.0
        };
        let min_sep_sq = self.rain_config.min_separation.max(0.0).powi(2);

        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let candidate = self.spawn_center
                + Vec2::new(
                    self.rng.gen_range(-half..=half),
                    self.rng.gen_range(-half..=half),
                );
            let free = self.rain.iter().all(|d| {
                let xz = Vec2::new(d.position.x, d.position.z);
                xz.distance_squared(candidate) > min_sep_sq
            });
            if free {
                return Some(candidate);
            }
        }

        None
    }
}
