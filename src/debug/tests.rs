//! Debug tooling tests.

use bevy::prelude::*;

use super::systems::refresh_god_mode;
use crate::player::{PlayerEntity, PlayerTuning};

#[test]
fn test_god_mode_absorbs_damage() {
    let mut player = PlayerEntity::new(Vec2::new(100.0, 500.0), PlayerTuning::default()).unwrap();

    refresh_god_mode(&mut player, 1.0 / 60.0);

    assert!(player.combat.is_invulnerable());
    assert_eq!(player.take_damage(50.0), None);
    assert_eq!(player.health.current, 100.0);
}

#[test]
fn test_god_mode_keeps_longer_window() {
    let mut player = PlayerEntity::new(Vec2::new(100.0, 500.0), PlayerTuning::default()).unwrap();
    player.combat.invulnerable_timer = 0.75;

    refresh_god_mode(&mut player, 1.0 / 60.0);

    assert_eq!(player.combat.invulnerable_timer, 0.75);
}
