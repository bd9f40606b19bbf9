//! Combat domain: attack timing, health, hitboxes and damage.

mod events;
mod health;
mod hitbox;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{AttackStartedEvent, DamageEvent, EnemyDefeatedEvent};
pub use health::Health;
pub use hitbox::place_hitbox;
pub use resources::{CombatTiming, HitboxShape, Knockback};
pub use state::{
    AttackVariant, COMBO_DAMAGE_STEP, CombatState, TargetId, apply_damage, combo_damage,
};

use bevy::prelude::*;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AttackStartedEvent>()
            .add_message::<DamageEvent>()
            .add_message::<EnemyDefeatedEvent>()
            .add_systems(Update, systems::log_combat_events);
    }
}
