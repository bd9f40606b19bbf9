//! Combat domain: per-entity timing and hitbox tuning.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, positive};

/// Velocity applied to an entity when a hit lands.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Knockback {
    /// Pushed away from the victim's facing direction
    pub horizontal: f32,
    /// Upward kick, positive values lift
    pub lift: f32,
}

/// Attack, combo and hit-reaction timing for one kind of combatant.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CombatTiming {
    /// Seconds the hitbox stays active
    pub attack_duration: f32,
    /// Lockout from attack start until the next attack may begin
    pub attack_cooldown: f32,
    /// Longest combo chain; 1 disables chaining
    pub max_combo: u32,
    /// Seconds after an attack in which the next one extends the combo
    pub combo_window: f32,
    pub hit_stun_duration: f32,
    pub invulnerable_duration: f32,
    pub knockback: Knockback,
}

impl Default for CombatTiming {
    fn default() -> Self {
        Self {
            attack_duration: 0.3,
            attack_cooldown: 0.5,
            max_combo: 3,
            combo_window: 0.8,
            hit_stun_duration: 0.4,
            invulnerable_duration: 1.0,
            knockback: Knockback {
                horizontal: 250.0,
                lift: 250.0,
            },
        }
    }
}

impl CombatTiming {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_combo == 0 {
            return Err(ConfigError::MaxCombo(self.max_combo));
        }
        if !positive(self.attack_duration) {
            return Err(ConfigError::AttackDuration(self.attack_duration));
        }
        Ok(())
    }
}

/// Hitbox extent relative to the owner's bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HitboxShape {
    pub width: f32,
    pub height: f32,
    /// Distance from the owner's top edge down to the hitbox top
    pub offset_y: f32,
}

impl HitboxShape {
    pub const fn new(width: f32, height: f32, offset_y: f32) -> Self {
        Self {
            width,
            height,
            offset_y,
        }
    }
}
