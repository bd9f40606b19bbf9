//! Physics domain: integration and bounds tests.

use bevy::prelude::*;

use super::{KinematicBody, PhysicsTuning};
use crate::core::ConfigError;

fn body_at(x: f32, y: f32) -> KinematicBody {
    KinematicBody::new(Vec2::new(x, y), 50.0, 80.0).unwrap()
}

#[test]
fn test_bounds_anchor_at_feet() {
    let body = body_at(100.0, 500.0);
    let bounds = body.bounds();

    assert_eq!(bounds.min, Vec2::new(75.0, 420.0));
    assert_eq!(bounds.max, Vec2::new(125.0, 500.0));
    assert_eq!(body.center(), Vec2::new(100.0, 460.0));
}

#[test]
fn test_rejects_degenerate_size() {
    let result = KinematicBody::new(Vec2::ZERO, 0.0, 80.0);
    assert_eq!(
        result,
        Err(ConfigError::BodySize {
            width: 0.0,
            height: 80.0
        })
    );
    assert!(KinematicBody::new(Vec2::ZERO, 10.0, -1.0).is_err());
}

#[test]
fn test_integrate_applies_gravity_before_position() {
    let physics = PhysicsTuning::default();
    let mut body = body_at(0.0, 0.0);
    body.velocity.x = 120.0;

    body.integrate(0.1, &physics);

    // vy = 1500 * 0.1 = 150, then y = 150 * 0.1
    assert!((body.velocity.y - 150.0).abs() < 1e-4);
    assert!((body.position.y - 15.0).abs() < 1e-4);
    assert!((body.position.x - 12.0).abs() < 1e-4);
}

#[test]
fn test_fall_speed_never_exceeds_terminal() {
    let physics = PhysicsTuning::default();
    let mut body = body_at(0.0, 0.0);
    let dts = [0.016, 0.033, 0.5, 0.001, 1.0, 0.016, 0.25, 2.0];

    for _ in 0..20 {
        for dt in dts {
            body.integrate(dt, &physics);
            assert!(body.velocity.y <= physics.max_fall_speed);
        }
    }
    assert_eq!(body.velocity.y, physics.max_fall_speed);
}

#[test]
fn test_upward_velocity_is_not_clamped() {
    let physics = PhysicsTuning::default();
    let mut body = body_at(0.0, 500.0);
    body.velocity.y = -600.0;

    body.integrate(1.0 / 60.0, &physics);

    assert!((body.velocity.y - (-575.0)).abs() < 1e-3);
    assert!(body.position.y < 500.0);
}

#[test]
fn test_land_on_snaps_and_grounds() {
    let mut body = body_at(0.0, 583.0);
    body.velocity.y = 400.0;

    body.land_on(580.0);

    assert_eq!(body.position.y, 580.0);
    assert_eq!(body.velocity.y, 0.0);
    assert!(body.on_ground);
}
