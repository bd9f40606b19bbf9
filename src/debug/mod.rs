//! Debug tooling for fast iteration (feature `dev-tools`).
//!
//! - F1 toggles god mode
//! - F2 toggles collision outlines
//! - Logs a JSON snapshot of the session once per second at debug level

mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::sim::Session;

/// Seconds between telemetry lines
pub const TELEMETRY_INTERVAL: f32 = 1.0;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Keeps the player's invulnerability window open
    pub god_mode: bool,
    pub show_outlines: bool,
    pub telemetry: Timer,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            god_mode: false,
            show_outlines: true,
            telemetry: Timer::from_seconds(TELEMETRY_INTERVAL, TimerMode::Repeating),
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                systems::handle_debug_hotkeys,
                (
                    systems::apply_god_mode,
                    systems::draw_outlines
                        .run_if(|state: Res<DebugState>| state.show_outlines),
                    systems::log_telemetry,
                )
                    .run_if(resource_exists::<Session>),
            )
                .chain(),
        );
    }
}
