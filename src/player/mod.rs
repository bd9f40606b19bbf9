//! Player domain: the player avatar, its tuning and keyboard input.

mod controller;
mod input;
mod resources;


pub use controller::{
    AnimationState, AttackStart, INPUT_DEADZONE, PlayerActions, PlayerEntity, approach_velocity,
};
pub use resources::{PlayerInput, PlayerTuning};

pub(crate) use input::read_player_input;

use bevy::prelude::*;

use crate::core::GameState;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>().add_systems(
            Update,
            read_player_input.run_if(in_state(GameState::Playing)),
        );
    }
}
