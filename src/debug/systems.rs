//! Debug systems: hotkeys, god mode, outlines and telemetry.

use bevy::prelude::*;

use crate::debug::DebugState;
use crate::player::PlayerEntity;
use crate::sim::{Session, to_world};

const PLATFORM_COLOR: Color = Color::srgb(0.3, 0.8, 0.3);
const PLAYER_COLOR: Color = Color::srgb(0.3, 0.6, 1.0);
const ENEMY_COLOR: Color = Color::srgb(1.0, 0.8, 0.2);
const HITBOX_COLOR: Color = Color::srgb(1.0, 0.2, 0.2);

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.god_mode = !debug_state.god_mode;
        info!(
            "[DEBUG] God mode {}",
            if debug_state.god_mode { "ON" } else { "OFF" }
        );
    }

    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_outlines = !debug_state.show_outlines;
    }
}

/// Hold the invulnerability window open for at least one more frame
pub(crate) fn refresh_god_mode(player: &mut PlayerEntity, dt: f32) {
    let timer = &mut player.combat.invulnerable_timer;
    *timer = timer.max(dt * 2.0);
}

pub(crate) fn apply_god_mode(
    time: Res<Time>,
    debug_state: Res<DebugState>,
    mut session: ResMut<Session>,
) {
    if debug_state.god_mode {
        refresh_god_mode(session.player_mut(), time.delta_secs().max(f32::EPSILON));
    }
}

/// Outline a screen-space rectangle in world space.
fn outline(gizmos: &mut Gizmos, rect: Rect, color: Color) {
    gizmos.rect_2d(to_world(rect.center()), rect.size(), color);
}

pub(crate) fn draw_outlines(session: Res<Session>, mut gizmos: Gizmos) {
    for platform in session.geometry().platforms() {
        outline(&mut gizmos, *platform, PLATFORM_COLOR);
    }

    let player = session.player();
    outline(&mut gizmos, player.body.bounds(), PLAYER_COLOR);
    if let Some(hitbox) = player.attack_hitbox() {
        outline(&mut gizmos, hitbox, HITBOX_COLOR);
    }

    for enemy in session.enemies() {
        outline(&mut gizmos, enemy.body.bounds(), ENEMY_COLOR);
        if let Some(hitbox) = enemy.attack_hitbox() {
            outline(&mut gizmos, hitbox, HITBOX_COLOR);
        }
    }
}

pub(crate) fn log_telemetry(
    time: Res<Time>,
    mut debug_state: ResMut<DebugState>,
    session: Res<Session>,
) {
    if !debug_state.telemetry.tick(time.delta()).just_finished() {
        return;
    }

    match serde_json::to_string(&session.snapshot()) {
        Ok(line) => debug!("telemetry {}", line),
        Err(e) => warn!("Failed to encode telemetry: {}", e),
    }
}
