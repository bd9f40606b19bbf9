//! Built-in content used when assets/data cannot be loaded.
//!
//! Mirrors the shipped RON files so the game stays playable from a bare
//! binary.

use super::data::*;
use super::registry::ContentRegistry;
use crate::enemy::EnemyTuning;

const LEVEL_HEIGHT: f32 = 720.0;
const GROUND_TOP: f32 = 700.0;
const SPAWN_HEIGHT: f32 = 300.0;

fn character(
    id: &str,
    name: &str,
    stats: (f32, f32, f32, f32),
    special_ability: &str,
) -> CharacterDef {
    let (health, speed, jump_force, attack_damage) = stats;
    CharacterDef {
        id: id.to_string(),
        name: name.to_string(),
        health,
        speed,
        jump_force,
        attack_damage,
        special_ability: special_ability.to_string(),
    }
}

pub fn builtin_characters() -> Vec<CharacterDef> {
    vec![
        character("hero_skunk", "Hero Skunk", (100.0, 300.0, 600.0, 20.0), "Stink Bomb"),
        character("ninja_skunk", "Ninja Skunk", (80.0, 400.0, 700.0, 15.0), "Shadow Strike"),
        character("tank_skunk", "Tank Skunk", (150.0, 200.0, 500.0, 30.0), "Ground Pound"),
        character("mage_skunk", "Mage Skunk", (70.0, 250.0, 550.0, 25.0), "Magic Blast"),
    ]
}

pub fn builtin_enemies() -> Vec<EnemyDef> {
    vec![
        EnemyDef {
            id: "thug".to_string(),
            name: "Street Thug".to_string(),
            stats: EnemyTuning::default(),
        },
        EnemyDef {
            id: "brute".to_string(),
            name: "Brute".to_string(),
            stats: EnemyTuning {
                width: 60.0,
                height: 80.0,
                max_health: 90.0,
                speed: 110.0,
                attack_damage: 15.0,
                points: 200,
                ..EnemyTuning::default()
            },
        },
    ]
}

fn platform(x: f32, y: f32, width: f32) -> PlatformDef {
    PlatformDef {
        x,
        y,
        width,
        height: 24.0,
    }
}

fn ground(width: f32) -> PlatformDef {
    PlatformDef {
        x: 0.0,
        y: GROUND_TOP,
        width,
        height: 40.0,
    }
}

fn spawn(x: SpawnX, y: f32) -> SpawnPointDef {
    SpawnPointDef { x, y }
}

fn archetypes(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

pub fn builtin_levels() -> Vec<LevelDef> {
    vec![
        LevelDef {
            id: "level_1".to_string(),
            name: "Forest Outskirts".to_string(),
            width: 2400.0,
            height: LEVEL_HEIGHT,
            player_spawn: (150.0, GROUND_TOP),
            platforms: vec![
                ground(2400.0),
                platform(200.0, 550.0, 200.0),
                platform(500.0, 450.0, 200.0),
                platform(900.0, 550.0, 200.0),
                platform(1300.0, 450.0, 200.0),
                platform(1700.0, 550.0, 200.0),
                platform(2100.0, 450.0, 200.0),
            ],
            spawn_points: vec![
                spawn(SpawnX::Right, SPAWN_HEIGHT),
                spawn(SpawnX::At(1200.0), SPAWN_HEIGHT),
                spawn(SpawnX::Left, SPAWN_HEIGHT),
            ],
            enemy_config: EnemyWaveDef {
                spawn_interval: 3.5,
                max_enemies: 4,
                archetypes: archetypes(&["thug"]),
            },
            kills_to_clear: 10,
        },
        LevelDef {
            id: "level_2".to_string(),
            name: "Skunk City".to_string(),
            width: 3200.0,
            height: LEVEL_HEIGHT,
            player_spawn: (150.0, GROUND_TOP),
            platforms: vec![
                ground(3200.0),
                platform(300.0, 500.0, 150.0),
                platform(500.0, 400.0, 150.0),
                platform(1100.0, 500.0, 400.0),
                platform(1700.0, 600.0, 150.0),
                platform(1900.0, 500.0, 150.0),
                platform(2100.0, 400.0, 150.0),
                platform(2500.0, 400.0, 500.0),
            ],
            spawn_points: vec![
                spawn(SpawnX::Right, SPAWN_HEIGHT),
                spawn(SpawnX::At(800.0), SPAWN_HEIGHT),
                spawn(SpawnX::At(1600.0), SPAWN_HEIGHT),
                spawn(SpawnX::At(2400.0), 100.0),
            ],
            enemy_config: EnemyWaveDef {
                spawn_interval: 2.5,
                max_enemies: 6,
                archetypes: archetypes(&["thug", "thug", "brute"]),
            },
            kills_to_clear: 15,
        },
        LevelDef {
            id: "level_3".to_string(),
            name: "Shadow Dojo".to_string(),
            width: 4000.0,
            height: LEVEL_HEIGHT,
            player_spawn: (150.0, GROUND_TOP),
            platforms: vec![
                ground(4000.0),
                platform(400.0, 550.0, 100.0),
                platform(1000.0, 400.0, 800.0),
                platform(2500.0, 400.0, 100.0),
                platform(2800.0, 300.0, 100.0),
                platform(3200.0, 500.0, 600.0),
            ],
            spawn_points: vec![
                spawn(SpawnX::Right, SPAWN_HEIGHT),
                spawn(SpawnX::Left, SPAWN_HEIGHT),
                spawn(SpawnX::At(1000.0), SPAWN_HEIGHT),
                spawn(SpawnX::At(2000.0), SPAWN_HEIGHT),
                spawn(SpawnX::At(3000.0), SPAWN_HEIGHT),
            ],
            enemy_config: EnemyWaveDef {
                spawn_interval: 2.0,
                max_enemies: 8,
                archetypes: archetypes(&["thug", "brute"]),
            },
            kills_to_clear: 20,
        },
    ]
}

impl ContentRegistry {
    pub fn builtin() -> Self {
        Self {
            characters: builtin_characters()
                .into_iter()
                .map(|c| (c.id.clone(), c))
                .collect(),
            enemies: builtin_enemies()
                .into_iter()
                .map(|e| (e.id.clone(), e))
                .collect(),
            levels: builtin_levels(),
        }
    }
}
