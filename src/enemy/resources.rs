//! Enemy domain: per-archetype stats and AI ranges.

use serde::{Deserialize, Serialize};

use crate::combat::{CombatTiming, HitboxShape, Knockback};
use crate::core::{ConfigError, positive};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub width: f32,
    pub height: f32,
    pub max_health: f32,
    pub speed: f32,
    pub attack_damage: f32,
    /// Score awarded when defeated in combat
    pub points: u32,
    /// Half-width of the patrol span around the spawn x
    pub patrol_range: f32,
    pub attack_range: f32,
    pub detection_range: f32,
    /// Max vertical distance for an attack to be attempted
    pub vertical_proximity: f32,
    pub combat: CombatTiming,
    pub attack_hitbox: HitboxShape,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 70.0,
            max_health: 50.0,
            speed: 150.0,
            attack_damage: 10.0,
            points: 100,
            patrol_range: 200.0,
            attack_range: 60.0,
            detection_range: 300.0,
            vertical_proximity: 50.0,
            combat: CombatTiming {
                attack_duration: 0.4,
                attack_cooldown: 1.5,
                max_combo: 1,
                combo_window: 0.0,
                hit_stun_duration: 0.2,
                invulnerable_duration: 0.0,
                knockback: Knockback {
                    horizontal: 150.0,
                    lift: 120.0,
                },
            },
            attack_hitbox: HitboxShape::new(50.0, 40.0, 20.0),
        }
    }
}

impl EnemyTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::BodySize {
                width: self.width,
                height: self.height,
            });
        }
        self.combat.validate()
    }
}
