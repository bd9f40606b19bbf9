//! Combat domain: tests for timers, combos, damage intake and hitboxes.

use bevy::prelude::*;

use super::{
    AttackVariant, CombatState, CombatTiming, Health, HitboxShape, TargetId, apply_damage,
    combo_damage, place_hitbox,
};
use crate::core::ConfigError;
use crate::enemy::EnemyId;
use crate::physics::{Facing, KinematicBody};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn timing() -> CombatTiming {
    CombatTiming::default()
}

// -----------------------------------------------------------------------------
// Health tests
// -----------------------------------------------------------------------------

#[test]
fn test_health_floors_at_zero() {
    let mut health = Health::new(50.0);

    assert_eq!(health.take_damage(30.0), 30.0);
    assert_eq!(health.take_damage(30.0), 20.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());
}

#[test]
fn test_health_restore_refills_to_max() {
    let mut health = Health::new(100.0);
    health.take_damage(35.0);

    health.restore();
    assert_eq!(health.current, 100.0);
    // Negative max is clamped so the pool stays valid
    assert_eq!(Health::new(-5.0).max, 0.0);
}

// -----------------------------------------------------------------------------
// Timer tests
// -----------------------------------------------------------------------------

#[test]
fn test_timers_clamp_at_zero() {
    let mut state = CombatState::default();
    state.begin_attack(&timing(), AttackVariant::Normal, 20.0);
    state.hit_stun_timer = 0.1;
    state.invulnerable_timer = 0.2;

    state.tick(5.0);

    assert_eq!(state.attack_timer, 0.0);
    assert_eq!(state.attack_cooldown_timer, 0.0);
    assert_eq!(state.hit_stun_timer, 0.0);
    assert_eq!(state.invulnerable_timer, 0.0);
    assert!(!state.is_attacking());
    assert!(state.cooldown_ready());
}

#[test]
fn test_attacking_tracks_attack_timer() {
    let mut state = CombatState::default();
    assert!(!state.is_attacking());

    state.begin_attack(&timing(), AttackVariant::Normal, 20.0);
    assert!(state.is_attacking());

    state.tick(0.2);
    assert!(state.is_attacking());
    state.tick(0.15);
    assert!(!state.is_attacking());
    // Cooldown outlasts the hitbox
    assert!(!state.cooldown_ready());
}

#[test]
fn test_validate_rejects_bad_timing() {
    let mut bad = timing();
    bad.max_combo = 0;
    assert_eq!(bad.validate(), Err(ConfigError::MaxCombo(0)));

    let mut bad = timing();
    bad.attack_duration = 0.0;
    assert_eq!(bad.validate(), Err(ConfigError::AttackDuration(0.0)));

    assert!(timing().validate().is_ok());
}

// -----------------------------------------------------------------------------
// Combo tests
// -----------------------------------------------------------------------------

#[test]
fn test_combo_extends_inside_window() {
    let timing = timing();
    let mut state = CombatState::default();

    assert_eq!(state.advance_combo(&timing), 1);
    state.tick(0.5);
    assert_eq!(state.advance_combo(&timing), 2);
    state.tick(0.5);
    assert_eq!(state.advance_combo(&timing), 3);
}

#[test]
fn test_combo_restarts_at_cap() {
    let timing = timing();
    let mut state = CombatState::default();

    for _ in 0..timing.max_combo {
        state.advance_combo(&timing);
        state.tick(0.1);
    }
    assert_eq!(state.combo_count, timing.max_combo);
    assert_eq!(state.advance_combo(&timing), 1);
}

#[test]
fn test_combo_expires_to_zero() {
    let timing = timing();
    let mut state = CombatState::default();
    state.advance_combo(&timing);
    state.advance_combo(&timing);
    assert_eq!(state.combo_count, 2);

    state.tick(timing.combo_window + 0.01);

    assert_eq!(state.combo_count, 0);
    assert_eq!(state.advance_combo(&timing), 1);
}

#[test]
fn test_combo_damage_scaling() {
    assert!(approx(combo_damage(20.0, 1), 20.0));
    assert!(approx(combo_damage(20.0, 2), 24.0));
    assert!(approx(combo_damage(20.0, 3), 28.0));
    // A zero count is treated as the first hit
    assert!(approx(combo_damage(20.0, 0), 20.0));
}

// -----------------------------------------------------------------------------
// Hit tracking tests
// -----------------------------------------------------------------------------

#[test]
fn test_hit_registered_once_per_attack() {
    let mut state = CombatState::default();
    let target = TargetId::Enemy(EnemyId(3));

    state.begin_attack(&timing(), AttackVariant::Normal, 20.0);
    assert!(state.register_hit(target));
    assert!(!state.register_hit(target));
    assert!(state.register_hit(TargetId::Enemy(EnemyId(4))));

    // A new activation clears the ledger
    state.begin_attack(&timing(), AttackVariant::Normal, 20.0);
    assert!(!state.has_hit(target));
    assert!(state.register_hit(target));
}

// -----------------------------------------------------------------------------
// Damage intake tests
// -----------------------------------------------------------------------------

#[test]
fn test_damage_ignored_while_invulnerable() {
    let timing = timing();
    let mut health = Health::new(100.0);
    let mut state = CombatState::default();
    let mut body = KinematicBody::new(Vec2::new(0.0, 500.0), 50.0, 80.0).unwrap();

    let first = apply_damage(
        &mut health,
        &mut state,
        &mut body,
        Facing::Right,
        &timing,
        20.0,
    );
    let second = apply_damage(
        &mut health,
        &mut state,
        &mut body,
        Facing::Right,
        &timing,
        20.0,
    );

    assert_eq!(first, Some(20.0));
    assert_eq!(second, None);
    assert_eq!(health.current, 80.0);
}

#[test]
fn test_damage_sets_reaction_and_knockback() {
    let timing = timing();
    let mut health = Health::new(100.0);
    let mut state = CombatState::default();
    let mut body = KinematicBody::new(Vec2::new(0.0, 500.0), 50.0, 80.0).unwrap();
    body.on_ground = true;

    apply_damage(
        &mut health,
        &mut state,
        &mut body,
        Facing::Right,
        &timing,
        10.0,
    );

    assert!(state.is_stunned());
    assert!(state.is_invulnerable());
    assert_eq!(body.velocity.x, -timing.knockback.horizontal);
    assert_eq!(body.velocity.y, -timing.knockback.lift);
    assert!(!body.on_ground);

    // Damage lands again once the window closes
    state.tick(timing.invulnerable_duration);
    assert!(
        apply_damage(
            &mut health,
            &mut state,
            &mut body,
            Facing::Left,
            &timing,
            10.0
        )
        .is_some()
    );
    assert_eq!(body.velocity.x, timing.knockback.horizontal);
    assert_eq!(health.current, 80.0);
}

// -----------------------------------------------------------------------------
// Hitbox tests
// -----------------------------------------------------------------------------

#[test]
fn test_hitbox_follows_facing() {
    let owner = Rect::new(75.0, 420.0, 125.0, 500.0);
    let shape = HitboxShape::new(60.0, 40.0, 20.0);

    let right = place_hitbox(owner, Facing::Right, &shape);
    assert_eq!(right.min, Vec2::new(125.0, 440.0));
    assert_eq!(right.max, Vec2::new(185.0, 480.0));

    let left = place_hitbox(owner, Facing::Left, &shape);
    assert_eq!(left.min, Vec2::new(15.0, 440.0));
    assert_eq!(left.max, Vec2::new(75.0, 480.0));
}
