mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod enemy;
mod level;
mod physics;
mod player;
mod sim;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Skunk Squad".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        combat::CombatPlugin,
        player::PlayerPlugin,
        sim::SimulationPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
