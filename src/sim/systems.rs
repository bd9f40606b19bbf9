//! Simulation domain: Bevy adapters around `Session`.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{AttackStartedEvent, DamageEvent, EnemyDefeatedEvent};
use crate::content::{ContentRegistry, GameplayDefaults};
use crate::core::{
    AdvanceLevelEvent, GameState, LevelClearedEvent, PlayerDefeatedEvent, RestartRunEvent,
    RunConfig, Score,
};
use crate::player::PlayerInput;
use crate::sim::{Session, SimEvent, to_world};

/// Horizontal half-extent of the default window
const HALF_VIEW_WIDTH: f32 = 640.0;

/// Build the session from loaded content and start playing.
pub(crate) fn build_session(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    defaults: Res<GameplayDefaults>,
    run_config: Res<RunConfig>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(level) = registry.levels.get(run_config.level_index) else {
        error!(
            "No level at index {} ({} loaded)",
            run_config.level_index,
            registry.levels.len()
        );
        return;
    };

    let character_id = run_config
        .character
        .as_deref()
        .unwrap_or(&defaults.default_character);
    let player_tuning = match registry.characters.get(character_id) {
        Some(character) => {
            info!("Playing as {} ({})", character.name, character.special_ability);
            defaults.player.for_character(character)
        }
        None => {
            warn!("Unknown character '{}', using base tuning", character_id);
            defaults.player.clone()
        }
    };
    debug!(
        "Player jump height {:.0}px",
        player_tuning.jump_height(defaults.physics.gravity)
    );

    match Session::new(
        level,
        player_tuning,
        registry.enemy_tunings(),
        defaults.physics,
        run_config.seed,
    ) {
        Ok(session) => {
            info!(
                "Starting {} ({}) with seed {}",
                level.name, level.id, run_config.seed
            );
            commands.insert_resource(session);
            next_state.set(GameState::Playing);
        }
        Err(e) => error!("Rejected session configuration: {}", e),
    }
}

pub(crate) fn step_session(
    time: Res<Time>,
    input: Res<PlayerInput>,
    run_config: Res<RunConfig>,
    mut session: ResMut<Session>,
    mut score: ResMut<Score>,
    mut attacks: MessageWriter<AttackStartedEvent>,
    mut damage: MessageWriter<DamageEvent>,
    mut defeats: MessageWriter<EnemyDefeatedEvent>,
    mut player_defeated: MessageWriter<PlayerDefeatedEvent>,
    mut level_cleared: MessageWriter<LevelClearedEvent>,
) {
    let events = session.step(&input, time.delta_secs(), &mut *score);

    for event in events {
        match event {
            SimEvent::AttackStarted {
                attacker,
                variant,
                combo,
            } => {
                attacks.write(AttackStartedEvent {
                    attacker,
                    variant,
                    combo,
                });
            }
            SimEvent::Hit {
                attacker,
                target,
                damage: amount,
            } => {
                damage.write(DamageEvent {
                    source: attacker,
                    target,
                    amount,
                });
            }
            SimEvent::EnemyDefeated { id, points } => {
                defeats.write(EnemyDefeatedEvent { enemy: id, points });
            }
            SimEvent::PlayerDefeated => {
                player_defeated.write(PlayerDefeatedEvent {
                    level_index: run_config.level_index,
                });
            }
            SimEvent::LevelCleared => {
                level_cleared.write(LevelClearedEvent {
                    level_index: run_config.level_index,
                });
            }
            SimEvent::PlayerJumped
            | SimEvent::PlayerLanded
            | SimEvent::EnemySpawned { .. }
            | SimEvent::EnemyLost { .. } => {}
        }
    }
}

pub(crate) fn handle_restart(
    mut events: MessageReader<RestartRunEvent>,
    registry: Res<ContentRegistry>,
    mut session: ResMut<Session>,
) {
    for _ in events.read() {
        let Some(first) = registry.levels.first() else {
            continue;
        };
        if let Err(e) = session.load_level(first) {
            error!("Failed to reload {}: {}", first.id, e);
            continue;
        }
        session.restart();
    }
}

pub(crate) fn handle_advance_level(
    mut events: MessageReader<AdvanceLevelEvent>,
    registry: Res<ContentRegistry>,
    mut session: ResMut<Session>,
) {
    for event in events.read() {
        match registry.levels.get(event.level_index) {
            Some(level) => {
                if let Err(e) = session.load_level(level) {
                    error!("Failed to load {}: {}", level.id, e);
                }
            }
            None => warn!("No level at index {}", event.level_index),
        }
    }
}

/// Keep the player centred, stopping at the level edges.
pub(crate) fn follow_player(
    session: Res<Session>,
    mut camera: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };

    let geometry = session.geometry();
    let max_x = (geometry.width() - HALF_VIEW_WIDTH).max(HALF_VIEW_WIDTH);
    let focus = Vec2::new(
        session.player().body.position.x.clamp(HALF_VIEW_WIDTH, max_x),
        geometry.height() * 0.5,
    );
    let world = to_world(focus);
    transform.translation.x = world.x;
    transform.translation.y = world.y;
}
