//! Level domain: tests for landing resolution, boundaries and spawning.

use bevy::prelude::*;

use super::{BoundaryContact, EDGE_SPAWN_MARGIN, EnemySpawner, LevelGeometry, overlaps};
use crate::content::{EnemyWaveDef, SpawnPointDef, SpawnX};
use crate::core::ConfigError;
use crate::physics::KinematicBody;

fn test_level() -> LevelGeometry {
    LevelGeometry::new(
        3000.0,
        720.0,
        vec![
            // Ground
            Rect::new(0.0, 580.0, 3000.0, 620.0),
            // Floating platform
            Rect::new(300.0, 480.0, 500.0, 500.0),
        ],
    )
    .unwrap()
}

fn body(x: f32, y: f32, vy: f32) -> KinematicBody {
    let mut body = KinematicBody::new(Vec2::new(x, y), 50.0, 80.0).unwrap();
    body.velocity.y = vy;
    body
}

// -----------------------------------------------------------------------------
// Overlap tests
// -----------------------------------------------------------------------------

#[test]
fn test_touching_edges_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 20.0, 10.0);
    let c = Rect::new(9.0, 9.0, 20.0, 20.0);

    assert!(!overlaps(a, b));
    assert!(overlaps(a, c));
}

// -----------------------------------------------------------------------------
// Landing tests
// -----------------------------------------------------------------------------

#[test]
fn test_falling_body_lands_on_platform_top() {
    let level = test_level();
    let mut falling = body(400.0, 485.0, 200.0);

    let landing = level.resolve(&mut falling);

    assert_eq!(landing.map(|l| l.platform), Some(1));
    assert_eq!(falling.position.y, 480.0);
    assert_eq!(falling.velocity.y, 0.0);
    assert!(falling.on_ground);
}

#[test]
fn test_rising_body_passes_through_platform() {
    let level = test_level();
    let mut rising = body(400.0, 495.0, -300.0);
    rising.on_ground = true;

    let landing = level.resolve(&mut rising);

    assert!(landing.is_none());
    assert_eq!(rising.position.y, 495.0);
    assert_eq!(rising.velocity.y, -300.0);
    assert!(!rising.on_ground);
}

#[test]
fn test_zero_vertical_velocity_does_not_land() {
    let level = test_level();
    assert!(
        level
            .find_landing(body(400.0, 490.0, 0.0).bounds(), 0.0)
            .is_none()
    );
}

#[test]
fn test_first_platform_in_order_wins() {
    let level = LevelGeometry::new(
        1000.0,
        720.0,
        vec![
            Rect::new(0.0, 400.0, 200.0, 420.0),
            Rect::new(0.0, 380.0, 200.0, 400.0),
        ],
    )
    .unwrap();

    let landing = level
        .find_landing(body(100.0, 405.0, 50.0).bounds(), 50.0)
        .unwrap();

    assert_eq!(landing.platform, 0);
    assert_eq!(landing.top, 400.0);
}

#[test]
fn test_fast_body_can_tunnel_through_thin_platform() {
    let level = test_level();
    let physics = crate::physics::PhysicsTuning {
        gravity: 0.0,
        max_fall_speed: 10_000.0,
    };
    // Feet start above the 20px platform and end below it in one frame
    let mut fast = body(400.0, 470.0, 5_000.0);
    fast.integrate(0.1, &physics);

    assert!(level.resolve(&mut fast).is_none());
    assert!(fast.position.y > 500.0);
}

#[test]
fn test_airborne_body_clears_ground_flag() {
    let level = test_level();
    let mut airborne = body(1000.0, 300.0, 100.0);
    airborne.on_ground = true;

    level.resolve(&mut airborne);

    assert!(!airborne.on_ground);
}

// -----------------------------------------------------------------------------
// Boundary tests
// -----------------------------------------------------------------------------

#[test]
fn test_rejects_degenerate_level() {
    assert_eq!(
        LevelGeometry::new(0.0, 720.0, Vec::new()),
        Err(ConfigError::LevelSize {
            width: 0.0,
            height: 720.0
        })
    );
}

#[test]
fn test_left_wall_clamps_position_and_velocity() {
    let level = test_level();
    let mut body = body(10.0, 580.0, 0.0);
    body.velocity.x = -300.0;

    let contact = level.constrain(&mut body);

    assert_eq!(contact, Some(BoundaryContact::LeftWall));
    assert_eq!(body.position.x, 25.0);
    assert_eq!(body.velocity.x, 0.0);
}

#[test]
fn test_right_wall_clamps_position() {
    let level = test_level();
    let mut body = body(2990.0, 580.0, 0.0);
    body.velocity.x = 300.0;

    assert_eq!(level.constrain(&mut body), Some(BoundaryContact::RightWall));
    assert_eq!(body.position.x, 2975.0);
    assert_eq!(body.velocity.x, 0.0);
}

#[test]
fn test_death_zone_reported_without_moving_body() {
    let level = test_level();
    let mut body = body(1000.0, 900.0, 800.0);

    assert_eq!(level.constrain(&mut body), Some(BoundaryContact::DeathZone));
    assert_eq!(body.position, Vec2::new(1000.0, 900.0));
}

#[test]
fn test_inside_level_has_no_contact() {
    let level = test_level();
    assert!(level.boundary_contact(body(1000.0, 580.0, 0.0).bounds()).is_none());
}

// -----------------------------------------------------------------------------
// Spawner tests
// -----------------------------------------------------------------------------

fn wave(max_enemies: u32) -> EnemyWaveDef {
    EnemyWaveDef {
        spawn_interval: 1.0,
        max_enemies,
        archetypes: vec!["grunt".to_string(), "brute".to_string()],
    }
}

fn points() -> Vec<SpawnPointDef> {
    vec![
        SpawnPointDef {
            x: SpawnX::Left,
            y: 300.0,
        },
        SpawnPointDef {
            x: SpawnX::Right,
            y: 300.0,
        },
        SpawnPointDef {
            x: SpawnX::At(1200.0),
            y: 300.0,
        },
    ]
}

#[test]
fn test_spawner_waits_for_interval() {
    let mut spawner = EnemySpawner::new(wave(4), points(), 2400.0, 7);

    assert!(spawner.tick(0.5, 0).is_none());
    assert!(spawner.tick(0.4, 0).is_none());
    assert!(spawner.tick(0.2, 0).is_some());
    // Timer restarts after each attempt
    assert!(spawner.tick(0.5, 0).is_none());
}

#[test]
fn test_spawner_respects_enemy_cap() {
    let mut spawner = EnemySpawner::new(wave(2), points(), 2400.0, 7);

    assert!(spawner.tick(1.0, 2).is_none());
    assert!(spawner.tick(1.0, 1).is_some());
}

#[test]
fn test_spawner_resolves_edge_points() {
    let spawner = EnemySpawner::new(wave(2), points(), 2400.0, 7);

    assert_eq!(spawner.resolve_x(SpawnX::Left), EDGE_SPAWN_MARGIN);
    assert_eq!(spawner.resolve_x(SpawnX::Right), 2400.0 - EDGE_SPAWN_MARGIN);
    assert_eq!(spawner.resolve_x(SpawnX::At(5000.0)), 2400.0);
}

#[test]
fn test_spawner_is_deterministic_per_seed() {
    let mut a = EnemySpawner::new(wave(100), points(), 2400.0, 42);
    let mut b = EnemySpawner::new(wave(100), points(), 2400.0, 42);

    for _ in 0..50 {
        assert_eq!(a.tick(1.0, 0), b.tick(1.0, 0));
    }

    a.reset(42);
    let mut c = EnemySpawner::new(wave(100), points(), 2400.0, 42);
    assert_eq!(a.tick(1.0, 0), c.tick(1.0, 0));
}

#[test]
fn test_spawner_without_points_never_spawns() {
    let mut spawner = EnemySpawner::new(wave(4), Vec::new(), 2400.0, 1);
    for _ in 0..10 {
        assert!(spawner.tick(1.0, 0).is_none());
    }
}
