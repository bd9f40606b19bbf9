//! Simulation domain: the deterministic per-frame step and its Bevy wiring.

mod session;
mod systems;


pub use session::{EnemySnapshot, EntitySnapshot, Session, SessionSnapshot, SimEvent};

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::read_player_input;

/// Screen space (+y down) to Bevy world space (+y up).
pub fn to_world(screen: Vec2) -> Vec2 {
    Vec2::new(screen.x, -screen.y)
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, systems::build_session)
            .add_systems(
                Update,
                (
                    (systems::handle_restart, systems::handle_advance_level),
                    systems::step_session
                        .after(read_player_input)
                        .run_if(in_state(GameState::Playing)),
                    systems::follow_player,
                )
                    .chain()
                    .run_if(resource_exists::<Session>),
            );
    }
}
