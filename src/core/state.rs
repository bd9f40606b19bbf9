//! Core domain: game flow states.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Playing,
    Paused,
    /// The player was defeated; waiting for a restart
    GameOver,
    /// Current level cleared; waiting to continue
    LevelComplete,
    /// Final level cleared
    Victory,
}
