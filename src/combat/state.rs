//! Combat domain: the attack/cooldown/hit-reaction timing state machine.

use bevy::prelude::*;
use serde::Serialize;

use crate::combat::{CombatTiming, Health};
use crate::enemy::EnemyId;
use crate::physics::{Facing, KinematicBody};

/// Extra damage per combo step beyond the first hit
pub const COMBO_DAMAGE_STEP: f32 = 0.2;

/// Damage of the `combo_count`-th hit in a chain.
pub fn combo_damage(base: f32, combo_count: u32) -> f32 {
    base * (1.0 + combo_count.saturating_sub(1) as f32 * COMBO_DAMAGE_STEP)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TargetId {
    Player,
    Enemy(EnemyId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AttackVariant {
    #[default]
    Normal,
    /// Dash strike with a larger hitbox
    Special,
}

/// Timers driving attacks, combos and hit reactions.
///
/// All timers count down to zero and stay there; "active" checks read
/// `timer > 0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatState {
    pub attack_timer: f32,
    pub attack_cooldown_timer: f32,
    pub combo_count: u32,
    pub combo_timer: f32,
    pub hit_stun_timer: f32,
    pub invulnerable_timer: f32,
    /// Variant of the most recent attack
    pub variant: AttackVariant,
    /// Damage dealt by the current attack
    pub attack_damage: f32,
    /// Targets already struck by the current attack
    hits: Vec<TargetId>,
}

fn count_down(timer: &mut f32, dt: f32) {
    *timer = (*timer - dt).max(0.0);
}

impl CombatState {
    pub fn is_attacking(&self) -> bool {
        self.attack_timer > 0.0
    }

    pub fn is_stunned(&self) -> bool {
        self.hit_stun_timer > 0.0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_timer > 0.0
    }

    pub fn cooldown_ready(&self) -> bool {
        self.attack_cooldown_timer <= 0.0
    }

    /// Advance every timer by `dt`. An expiring combo window drops the chain.
    pub fn tick(&mut self, dt: f32) {
        count_down(&mut self.attack_timer, dt);
        count_down(&mut self.attack_cooldown_timer, dt);
        count_down(&mut self.hit_stun_timer, dt);
        count_down(&mut self.invulnerable_timer, dt);

        if self.combo_timer > 0.0 {
            count_down(&mut self.combo_timer, dt);
            if self.combo_timer <= 0.0 {
                self.combo_count = 0;
            }
        }
    }

    /// Count this attack into the combo chain and reopen the window.
    ///
    /// Extends the chain while the window is open and below the cap,
    /// otherwise starts a new chain at 1.
    pub fn advance_combo(&mut self, timing: &CombatTiming) -> u32 {
        if self.combo_timer > 0.0 && self.combo_count < timing.max_combo {
            self.combo_count += 1;
        } else {
            self.combo_count = 1;
        }
        self.combo_timer = timing.combo_window;
        self.combo_count
    }

    /// Open the hitbox window and start the cooldown.
    pub fn begin_attack(&mut self, timing: &CombatTiming, variant: AttackVariant, damage: f32) {
        self.attack_timer = timing.attack_duration;
        self.attack_cooldown_timer = timing.attack_cooldown;
        self.variant = variant;
        self.attack_damage = damage;
        self.hits.clear();
    }

    /// Record a strike on `target`. False if this attack already hit it.
    pub fn register_hit(&mut self, target: TargetId) -> bool {
        if self.hits.contains(&target) {
            return false;
        }
        self.hits.push(target);
        true
    }

    pub fn has_hit(&self, target: TargetId) -> bool {
        self.hits.contains(&target)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Apply an incoming hit to an entity's health, timers and velocity.
///
/// Ignored while invulnerable. Returns the damage actually removed.
pub fn apply_damage(
    health: &mut Health,
    combat: &mut CombatState,
    body: &mut KinematicBody,
    facing: Facing,
    timing: &CombatTiming,
    amount: f32,
) -> Option<f32> {
    if combat.is_invulnerable() {
        return None;
    }

    let dealt = health.take_damage(amount);
    combat.hit_stun_timer = timing.hit_stun_duration;
    combat.invulnerable_timer = timing.invulnerable_duration;

    // Knocked away from where the entity is looking, with an upward kick
    body.velocity = Vec2::new(
        -facing.sign() * timing.knockback.horizontal,
        -timing.knockback.lift,
    );
    body.on_ground = false;

    Some(dealt)
}
