//! Player domain: keyboard sampling into `PlayerInput`.

use bevy::prelude::*;

use crate::player::PlayerInput;

pub(crate) fn read_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<PlayerInput>,
) {
    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }

    input.axis = axis;
    input.jump_just_pressed = keyboard.any_just_pressed([
        KeyCode::Space,
        KeyCode::KeyK,
        KeyCode::KeyW,
        KeyCode::ArrowUp,
    ]);
    input.attack_just_pressed =
        keyboard.just_pressed(KeyCode::KeyX) || keyboard.just_pressed(KeyCode::KeyJ);
    input.special_just_pressed =
        keyboard.just_pressed(KeyCode::KeyZ) || keyboard.just_pressed(KeyCode::KeyL);
}
