//! Player domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::{CombatTiming, HitboxShape};
use crate::content::CharacterDef;
use crate::core::{ConfigError, positive};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub width: f32,
    pub height: f32,
    pub max_health: f32,
    /// Top horizontal speed in pixels per second
    pub speed: f32,
    /// Horizontal speed gained per second while input is held
    pub acceleration: f32,
    /// Horizontal speed lost per second with no input
    pub friction: f32,
    pub jump_force: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Damage of the first hit in a combo
    pub attack_damage: f32,
    pub special_damage_multiplier: f32,
    /// Forward displacement of the special attack
    pub special_dash_distance: f32,
    pub combat: CombatTiming,
    pub attack_hitbox: HitboxShape,
    pub special_hitbox: HitboxShape,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 80.0,
            max_health: 100.0,
            speed: 300.0,
            acceleration: 2500.0,
            friction: 2000.0,
            jump_force: 600.0,
            coyote_time: 0.1,
            jump_buffer_time: 0.1,
            attack_damage: 20.0,
            special_damage_multiplier: 1.5,
            special_dash_distance: 120.0,
            combat: CombatTiming::default(),
            attack_hitbox: HitboxShape::new(60.0, 40.0, 20.0),
            special_hitbox: HitboxShape::new(100.0, 70.0, 5.0),
        }
    }
}

impl PlayerTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.combat.validate()?;
        if !positive(self.jump_force) {
            return Err(ConfigError::JumpForce(self.jump_force));
        }
        Ok(())
    }

    /// Overlay a character's stats on this tuning.
    pub fn for_character(&self, character: &CharacterDef) -> Self {
        Self {
            max_health: character.health,
            speed: character.speed,
            jump_force: character.jump_force,
            attack_damage: character.attack_damage,
            ..self.clone()
        }
    }

    /// Peak height of a standing jump: h = v² / (2g)
    pub fn jump_height(&self, gravity: f32) -> f32 {
        if gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * gravity)
    }
}

/// Per-frame player intent.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerInput {
    /// Horizontal axis in -1..=1
    pub axis: f32,
    pub jump_just_pressed: bool,
    pub attack_just_pressed: bool,
    pub special_just_pressed: bool,
}

impl PlayerInput {
    pub fn held(axis: f32) -> Self {
        Self {
            axis,
            ..default()
        }
    }
}
