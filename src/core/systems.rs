//! Core domain: run flow systems and setup.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::events::{
    AdvanceLevelEvent, LevelClearedEvent, PlayerDefeatedEvent, RestartRunEvent,
};
use crate::core::resources::{RunConfig, Score};
use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !(keyboard.just_pressed(KeyCode::Escape) || keyboard.just_pressed(KeyCode::KeyP)) {
        return;
    }

    match state.get() {
        GameState::Playing => {
            info!("Paused");
            next_state.set(GameState::Paused);
        }
        GameState::Paused => {
            info!("Resumed");
            next_state.set(GameState::Playing);
        }
        _ => {}
    }
}

pub(crate) fn handle_player_defeated(
    mut events: MessageReader<PlayerDefeatedEvent>,
    score: Res<Score>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in events.read() {
        info!(
            "Player defeated on level {} with {} points. Press R to restart.",
            event.level_index + 1,
            score.points
        );
        next_state.set(GameState::GameOver);
    }
}

pub(crate) fn handle_level_cleared(
    mut events: MessageReader<LevelClearedEvent>,
    registry: Res<ContentRegistry>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in events.read() {
        if event.level_index + 1 >= registry.levels.len() {
            info!("Final level cleared!");
            next_state.set(GameState::Victory);
        } else {
            info!(
                "Level {} cleared. Press Enter to continue.",
                event.level_index + 1
            );
            next_state.set(GameState::LevelComplete);
        }
    }
}

/// Enter moves on to the next level
pub(crate) fn continue_to_next_level(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut run_config: ResMut<RunConfig>,
    mut advance: MessageWriter<AdvanceLevelEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Enter) {
        return;
    }

    run_config.level_index += 1;
    advance.write(AdvanceLevelEvent {
        level_index: run_config.level_index,
    });
    next_state.set(GameState::Playing);
}

/// R starts over from the first level
pub(crate) fn restart_run(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut run_config: ResMut<RunConfig>,
    mut score: ResMut<Score>,
    mut restart: MessageWriter<RestartRunEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    run_config.level_index = 0;
    score.reset();
    restart.write(RestartRunEvent);
    info!("Restarting run with seed: {}", run_config.seed);
    next_state.set(GameState::Playing);
}
