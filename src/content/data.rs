//! Data definitions for all RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enemy::EnemyTuning;
use crate::physics::PhysicsTuning;
use crate::player::PlayerTuning;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Characters (characters.ron)
// ============================================================================

/// A playable skunk. Stats overlay the shared `PlayerTuning`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CharacterDef {
    pub id: String,
    pub name: String,
    pub health: f32,
    pub speed: f32,
    pub jump_force: f32,
    pub attack_damage: f32,
    pub special_ability: String,
}

// ============================================================================
// Enemies (enemies.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EnemyDef {
    pub id: String,
    pub name: String,
    /// Missing fields fall back to `EnemyTuning::default()`
    pub stats: EnemyTuning,
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

/// Static platform, top-left corner in screen space (+y down).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Horizontal placement of a spawn point.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub enum SpawnX {
    /// Just inside the left level edge
    Left,
    /// Just inside the right level edge
    Right,
    At(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SpawnPointDef {
    pub x: SpawnX,
    /// Feet position of the spawned enemy
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EnemyWaveDef {
    /// Seconds between spawn attempts
    pub spawn_interval: f32,
    /// Spawning pauses while this many enemies are alive
    pub max_enemies: u32,
    /// Enemy ids drawn from uniformly
    pub archetypes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    pub width: f32,
    pub height: f32,
    /// Player feet position on (re)spawn
    pub player_spawn: (f32, f32),
    pub platforms: Vec<PlatformDef>,
    pub spawn_points: Vec<SpawnPointDef>,
    pub enemy_config: EnemyWaveDef,
    /// Enemies to defeat before the level counts as cleared
    pub kills_to_clear: u32,
}

impl LevelDef {
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(self.player_spawn.0, self.player_spawn.1)
    }
}

// ============================================================================
// Gameplay defaults (gameplay.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Resource)]
#[serde(default)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub physics: PhysicsTuning,
    pub player: PlayerTuning,
    /// Character used when the run config names none
    pub default_character: String,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            physics: PhysicsTuning::default(),
            player: PlayerTuning::default(),
            default_character: "hero_skunk".to_string(),
        }
    }
}
