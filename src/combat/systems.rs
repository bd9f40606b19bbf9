//! Combat domain: combat message logging.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{AttackStartedEvent, DamageEvent, EnemyDefeatedEvent};

pub(crate) fn log_combat_events(
    mut attacks: MessageReader<AttackStartedEvent>,
    mut damage: MessageReader<DamageEvent>,
    mut defeats: MessageReader<EnemyDefeatedEvent>,
) {
    for event in attacks.read() {
        debug!(
            "{:?} started {:?} attack (combo {})",
            event.attacker, event.variant, event.combo
        );
    }
    for event in damage.read() {
        debug!(
            "{:?} hit {:?} for {:.1}",
            event.source, event.target, event.amount
        );
    }
    for event in defeats.read() {
        debug!("{:?} defeated, {} points", event.enemy, event.points);
    }
}
