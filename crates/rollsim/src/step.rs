//! One simulation tick over a [`BodySet`].

use crate::bodies::BodySet;
use crate::heightfield::HeightField;
use crate::params::PhysicsParams;

/// Counters for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Active bodies integrated.
    pub updated: usize,
    /// Bodies touching the surface after the tick.
    pub contacts: usize,
    /// Bodies reset after going non-finite.
    pub recovered: usize,
    /// Raindrops despawned for reaching their lifetime.
    pub expired: usize,
}

/// Advance every active body by `dt` against `surface`.
///
/// Bodies are updated independently in set order (ball first); there is no
/// body-body collision. Per-body failures are repaired in place and counted,
/// never returned. A non-positive or non-finite `dt` skips the tick.
pub fn step(
    bodies: &mut BodySet,
    surface: &HeightField,
    params: &PhysicsParams,
    dt: f32,
) -> StepReport {
    let mut report = StepReport::default();
    if !dt.is_finite() || dt <= 0.0 {
        log::warn!("Skipping simulation step with invalid dt {}", dt);
        return report;
    }

    for (handle, body) in bodies.iter_mut() {
        if !body.is_active() {
            continue;
        }

        let update = body.update(surface, params, dt);
        body.add_life();

        report.updated += 1;
        if update.in_contact {
            report.contacts += 1;
        }
        if update.recovered {
            report.recovered += 1;
            log::warn!(
                "Recovered non-finite state on {:?}; reset to {:?}",
                handle,
                body.position
            );
        }
    }

    report.expired = bodies.expire_rain();
    report
}
