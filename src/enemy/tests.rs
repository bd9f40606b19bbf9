//! Enemy domain: tests for state selection and per-state behavior.

use bevy::prelude::*;

use super::{AiState, EnemyEntity, EnemyId, EnemyTuning, decide_state};
use crate::level::BoundaryContact;
use crate::physics::{Facing, PhysicsTuning};

const DT: f32 = 1.0 / 60.0;

fn enemy_at(x: f32) -> EnemyEntity {
    EnemyEntity::new(EnemyId(1), "skunk_thug", Vec2::new(x, 500.0), EnemyTuning::default())
        .unwrap()
}

fn run(enemy: &mut EnemyEntity, player: Vec2, frames: usize) -> usize {
    let physics = PhysicsTuning::default();
    let mut attacks = 0;
    for _ in 0..frames {
        if enemy.update(player, DT, &physics) {
            attacks += 1;
        }
        // Keep the enemy on a flat floor at its spawn height
        enemy.body.land_on(500.0);
    }
    attacks
}

// -----------------------------------------------------------------------------
// State selection tests
// -----------------------------------------------------------------------------

#[test]
fn test_player_in_detection_range_is_chased() {
    let tuning = EnemyTuning::default();
    assert_eq!(decide_state(250.0, 0.0, &tuning), AiState::Chase);
    assert_eq!(decide_state(-250.0, 0.0, &tuning), AiState::Chase);
}

#[test]
fn test_state_thresholds() {
    let tuning = EnemyTuning::default();

    assert_eq!(decide_state(40.0, 10.0, &tuning), AiState::Attack);
    // Close horizontally but on another floor
    assert_eq!(decide_state(40.0, 80.0, &tuning), AiState::Chase);
    // Ranges are exclusive
    assert_eq!(decide_state(60.0, 0.0, &tuning), AiState::Chase);
    assert_eq!(decide_state(300.0, 0.0, &tuning), AiState::Patrol);
    assert_eq!(decide_state(1000.0, 0.0, &tuning), AiState::Patrol);
}

#[test]
fn test_state_ignores_history() {
    let mut enemy = enemy_at(1000.0);
    let physics = PhysicsTuning::default();

    enemy.update(Vec2::new(1030.0, 500.0), DT, &physics);
    assert_eq!(enemy.state, AiState::Attack);

    enemy.update(Vec2::new(1800.0, 500.0), DT, &physics);
    assert_eq!(enemy.state, AiState::Patrol);

    enemy.update(Vec2::new(enemy.body.position.x + 250.0, 500.0), DT, &physics);
    assert_eq!(enemy.state, AiState::Chase);
}

// -----------------------------------------------------------------------------
// Behavior tests
// -----------------------------------------------------------------------------

#[test]
fn test_patrol_turns_at_span_edges() {
    let mut enemy = enemy_at(1000.0);
    let far_away = Vec2::new(5000.0, 500.0);

    // 200px at 150px/s, then some distance back
    run(&mut enemy, far_away, 90);
    assert_eq!(enemy.facing, Facing::Right);
    assert_eq!(enemy.body.velocity.x, 150.0);

    run(&mut enemy, far_away, 240);
    let x = enemy.body.position.x;
    assert!(x > 795.0 && x < 1205.0, "x = {}", x);
}

#[test]
fn test_wall_turns_patrol_only() {
    let mut enemy = enemy_at(1000.0);

    enemy.turn_at_wall(BoundaryContact::LeftWall);
    assert_eq!(enemy.facing, Facing::Right);
    enemy.turn_at_wall(BoundaryContact::RightWall);
    assert_eq!(enemy.facing, Facing::Left);

    // Chasing keeps its heading toward the player
    run(&mut enemy, Vec2::new(800.0, 500.0), 1);
    assert_eq!(enemy.state, AiState::Chase);
    enemy.turn_at_wall(BoundaryContact::LeftWall);
    assert_eq!(enemy.facing, Facing::Left);
}

#[test]
fn test_chase_heads_for_player() {
    let mut enemy = enemy_at(1000.0);

    run(&mut enemy, Vec2::new(1200.0, 500.0), 1);

    assert_eq!(enemy.state, AiState::Chase);
    assert_eq!(enemy.facing, Facing::Right);
    assert_eq!(enemy.body.velocity.x, 150.0);
}

#[test]
fn test_attack_stops_and_faces_player() {
    let mut enemy = enemy_at(1000.0);
    assert_eq!(enemy.facing, Facing::Left);

    let attacks = run(&mut enemy, Vec2::new(1040.0, 500.0), 1);

    assert_eq!(attacks, 1);
    assert_eq!(enemy.body.velocity.x, 0.0);
    assert_eq!(enemy.facing, Facing::Right);
    let hitbox = enemy.attack_hitbox().unwrap();
    assert_eq!(hitbox.min.x, enemy.body.bounds().max.x);
    assert_eq!(enemy.combat.attack_damage, 10.0);
}

#[test]
fn test_attack_waits_for_cooldown() {
    let mut enemy = enemy_at(1000.0);
    let player = Vec2::new(1040.0, 500.0);

    // 1.5s cooldown: one attack in the first second, a second one by 2s
    assert_eq!(run(&mut enemy, player, 60), 1);
    assert_eq!(run(&mut enemy, player, 60), 1);
}

#[test]
fn test_patrol_resumes_after_attack() {
    let mut enemy = enemy_at(1000.0);

    run(&mut enemy, Vec2::new(1040.0, 500.0), 1);
    assert_eq!(enemy.body.velocity.x, 0.0);

    run(&mut enemy, Vec2::new(5000.0, 500.0), 1);
    assert_eq!(enemy.state, AiState::Patrol);
    assert_eq!(enemy.body.velocity.x, 150.0);
}

// -----------------------------------------------------------------------------
// Damage tests
// -----------------------------------------------------------------------------

#[test]
fn test_stun_lets_knockback_carry() {
    let mut enemy = enemy_at(1000.0);
    assert_eq!(enemy.take_damage(20.0), Some(20.0));
    // Facing left, so pushed right
    assert_eq!(enemy.body.velocity.x, 150.0);

    run(&mut enemy, Vec2::new(900.0, 500.0), 1);

    assert_eq!(enemy.state, AiState::Chase);
    assert_eq!(enemy.body.velocity.x, 150.0);
}

#[test]
fn test_enemy_has_no_invulnerability_window() {
    let mut enemy = enemy_at(1000.0);

    enemy.take_damage(30.0);
    enemy.take_damage(30.0);

    assert_eq!(enemy.health.current, 0.0);
    assert!(enemy.is_dead());
}
