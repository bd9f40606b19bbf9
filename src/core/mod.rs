//! Core domain: game flow, run configuration, scoring and shared errors.

mod error;
mod events;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub(crate) use error::positive;
pub use events::{AdvanceLevelEvent, LevelClearedEvent, PlayerDefeatedEvent, RestartRunEvent};
pub use resources::{RunConfig, Score, ScoreSink};
pub use state::GameState;

use bevy::prelude::*;

use systems::{
    continue_to_next_level, handle_level_cleared, handle_player_defeated, restart_run,
    setup_camera, toggle_pause,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .init_resource::<Score>()
            .add_message::<PlayerDefeatedEvent>()
            .add_message::<LevelClearedEvent>()
            .add_message::<RestartRunEvent>()
            .add_message::<AdvanceLevelEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    toggle_pause,
                    handle_player_defeated,
                    handle_level_cleared,
                    continue_to_next_level.run_if(in_state(GameState::LevelComplete)),
                    restart_run.run_if(
                        in_state(GameState::GameOver).or(in_state(GameState::Victory)),
                    ),
                ),
            );
    }
}
