//! Surface-constrained sphere behaviour
//!
//! Headless, deterministic checks of settling, rain toggling, spawn placement,
//! body independence and tunneling on slopes.

use rollsim::{
    generate_surface, step, BodyHandle, BodySet, HeightField, PhysicsParams, RainConfig,
    RainToggle, RigidSphere, SurfaceConfig, SurfaceShape, Vec2, Vec3,
};

const DT: f32 = 0.016;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// 20 x 20 flat field at height 0, centered on the origin.
fn flat_field() -> HeightField {
    let config = SurfaceConfig {
        shape: SurfaceShape::Flat { height: 0.0 },
        ..Default::default()
    };
    generate_surface(&config).unwrap()
}

fn incline_field(slope_x: f32) -> HeightField {
    let config = SurfaceConfig {
        shape: SurfaceShape::Incline {
            base: 0.0,
            slope_x,
            slope_z: 0.0,
        },
        ..Default::default()
    };
    generate_surface(&config).unwrap()
}

fn bodies_with_ball(position: Vec3, radius: f32) -> BodySet {
    BodySet::new(
        RigidSphere::new(position, radius),
        RainConfig::default(),
        Vec2::ZERO,
    )
}

fn run(bodies: &mut BodySet, surface: &HeightField, params: &PhysicsParams, ticks: usize) {
    for _ in 0..ticks {
        step(bodies, surface, params, DT);
    }
}

// =============================================================================
// SETTLING
// =============================================================================

#[test]
fn test_ball_settles_on_flat_field() {
    let surface = flat_field();
    let params = PhysicsParams::default();
    let mut bodies = bodies_with_ball(Vec3::new(0.0, 3.0, 0.0), 0.5);

    run(&mut bodies, &surface, &params, 600);
    let settled = bodies.ball().position;
    assert!(
        (settled.y - 0.5).abs() < 1e-3,
        "ball should rest on the surface, y = {}",
        settled.y
    );

    // And stay there
    run(&mut bodies, &surface, &params, 120);
    assert!((bodies.ball().position.y - 0.5).abs() < 1e-3);
    assert!(bodies.ball().velocity.length() < 1e-3);
    assert!((bodies.ball().position - settled).length() < 1e-3);
}

#[test]
fn test_raindrops_settle_too() {
    let surface = flat_field();
    let params = PhysicsParams::default();
    let mut bodies = bodies_with_ball(Vec3::new(0.0, 0.5, 0.0), 0.5);
    bodies.spawn_rain(10);

    run(&mut bodies, &surface, &params, 600);
    for drop in bodies.rain() {
        assert!((drop.position.y - drop.radius).abs() < 1e-3, "drop at {:?}", drop.position);
    }
}

// =============================================================================
// RAIN LIFECYCLE
// =============================================================================

#[test]
fn test_toggle_twice_nets_zero() {
    let surface = flat_field();
    let params = PhysicsParams::default();
    let mut bodies = bodies_with_ball(Vec3::new(1.0, 2.0, -1.0), 0.5);
    run(&mut bodies, &surface, &params, 5);
    let ball = bodies.ball().clone();

    assert_eq!(bodies.toggle_rain(), RainToggle::Spawned(25));
    assert_eq!(bodies.len(), 26);
    assert_eq!(bodies.toggle_rain(), RainToggle::Cleared(25));
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies.ball(), &ball);
}

#[test]
fn test_spawned_drops_are_distinct_and_inside_area() {
    let rain = RainConfig {
        spawn_half_extent: 4.0,
        min_separation: 0.5,
        ..Default::default()
    };
    let center = Vec2::new(2.0, -3.0);
    let mut bodies = BodySet::new(RigidSphere::new(Vec3::new(0.0, 1.0, 0.0), 0.5), rain, center);
    let ball = bodies.ball().clone();

    let handles = bodies.spawn_rain(40);
    assert_eq!(handles.len(), 40);
    assert_eq!(bodies.ball(), &ball);

    let drops = bodies.rain();
    for (i, a) in drops.iter().enumerate() {
        assert!(a.is_active());
        assert!((a.position.x - center.x).abs() <= 4.0);
        assert!((a.position.z - center.y).abs() <= 4.0);
        for b in &drops[i + 1..] {
            let d = Vec2::new(a.position.x - b.position.x, a.position.z - b.position.z);
            assert!(d.length() > 0.5, "drops too close: {:?} {:?}", a.position, b.position);
        }
    }
}

#[test]
fn test_same_seed_same_rain() {
    let mut a = bodies_with_ball(Vec3::ZERO, 0.5);
    let mut b = bodies_with_ball(Vec3::ZERO, 0.5);
    a.spawn_rain(10);
    b.spawn_rain(10);
    let pa: Vec<Vec3> = a.rain().iter().map(|d| d.position).collect();
    let pb: Vec<Vec3> = b.rain().iter().map(|d| d.position).collect();
    assert_eq!(pa, pb);
}

// =============================================================================
// INDEPENDENCE
// =============================================================================

#[test]
fn test_no_cross_body_interaction() {
    let surface = generate_surface(&SurfaceConfig::default()).unwrap();
    let params = PhysicsParams::default();

    let start = Vec3::new(1.5, 4.0, -2.0);
    let mut alone = bodies_with_ball(start, 0.5);
    let mut crowded = bodies_with_ball(start, 0.5);
    crowded.spawn_rain(25);
    // Drop one raindrop straight onto the ball
    crowded.get_mut(BodyHandle::Drop(0)).unwrap().position = start + Vec3::Y * 0.25;

    for _ in 0..200 {
        step(&mut alone, &surface, &params, DT);
        step(&mut crowded, &surface, &params, DT);
        assert_eq!(alone.ball().position, crowded.ball().position);
        assert_eq!(alone.ball().velocity, crowded.ball().velocity);
    }
}

// =============================================================================
// TUNNELING
// =============================================================================

#[test]
fn test_no_tunneling_on_steep_slope() {
    let surface = incline_field(1.5);
    let params = PhysicsParams::default();
    let mut bodies = bodies_with_ball(Vec3::new(4.0, 8.0, 0.0), 0.5);
    // Fire it hard into the slope
    bodies.ball_mut().velocity = Vec3::new(-30.0, -40.0, 0.0);

    for tick in 0..300 {
        step(&mut bodies, &surface, &params, DT);
        let ball = bodies.ball();
        let floor = surface.height_at(ball.position.x, ball.position.z) + ball.radius;
        assert!(
            ball.position.y >= floor - 1e-4,
            "tick {}: ball below surface ({} < {})",
            tick,
            ball.position.y,
            floor
        );
        assert!(ball.velocity.length() <= params.max_speed + 1e-3);
    }
}

#[test]
fn test_ball_rolls_down_incline() {
    let surface = incline_field(0.3);
    let params = PhysicsParams::default();
    let mut bodies = bodies_with_ball(Vec3::new(2.0, 1.2, 0.0), 0.5);

    run(&mut bodies, &surface, &params, 60);
    assert!(bodies.ball().position.x < 2.0, "x = {}", bodies.ball().position.x);
    assert!(bodies.ball().position.z.abs() < 1e-3);
}
