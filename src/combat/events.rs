//! Combat domain: combat-related events.

use bevy::ecs::message::Message;

use crate::combat::{AttackVariant, TargetId};
use crate::enemy::EnemyId;

/// Event emitted when a combatant starts an attack
#[derive(Debug)]
pub struct AttackStartedEvent {
    pub attacker: TargetId,
    pub variant: AttackVariant,
    /// Position in the combo chain, 0 for attacks that do not chain
    pub combo: u32,
}

impl Message for AttackStartedEvent {}

#[derive(Debug)]
pub struct DamageEvent {
    pub source: TargetId,
    pub target: TargetId,
    pub amount: f32,
}

impl Message for DamageEvent {}

/// Event emitted when an enemy is defeated in combat
#[derive(Debug)]
pub struct EnemyDefeatedEvent {
    pub enemy: EnemyId,
    pub points: u32,
}

impl Message for EnemyDefeatedEvent {}
