//! Level domain: timed enemy spawning from a level's wave config.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::{EnemyWaveDef, SpawnPointDef, SpawnX};
use crate::level::EDGE_SPAWN_MARGIN;

/// An enemy the session should create this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRequest {
    pub position: Vec2,
    pub archetype: String,
}

/// Spawns enemies on a fixed interval while under the live-enemy cap.
///
/// Point and archetype choices come from a seeded RNG so a session replays
/// identically for the same seed and inputs.
#[derive(Debug, Clone)]
pub struct EnemySpawner {
    config: EnemyWaveDef,
    spawn_points: Vec<SpawnPointDef>,
    level_width: f32,
    timer: f32,
    rng: ChaCha8Rng,
}

impl EnemySpawner {
    pub fn new(
        config: EnemyWaveDef,
        spawn_points: Vec<SpawnPointDef>,
        level_width: f32,
        seed: u64,
    ) -> Self {
        Self {
            config,
            spawn_points,
            level_width,
            timer: 0.0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Restart the interval and the random sequence.
    pub fn reset(&mut self, seed: u64) {
        self.timer = 0.0;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    pub fn resolve_x(&self, x: SpawnX) -> f32 {
        match x {
            SpawnX::Left => EDGE_SPAWN_MARGIN,
            SpawnX::Right => self.level_width - EDGE_SPAWN_MARGIN,
            SpawnX::At(x) => x.clamp(0.0, self.level_width),
        }
    }

    /// Advance the interval timer. At most one request per call.
    pub fn tick(&mut self, dt: f32, live_enemies: usize) -> Option<SpawnRequest> {
        if self.spawn_points.is_empty() || self.config.archetypes.is_empty() {
            return None;
        }

        self.timer += dt;
        if self.timer < self.config.spawn_interval {
            return None;
        }
        self.timer = 0.0;

        if live_enemies >= self.config.max_enemies as usize {
            return None;
        }

        let point = self.spawn_points[self.rng.random_range(0..self.spawn_points.len())];
        let archetype =
            self.config.archetypes[self.rng.random_range(0..self.config.archetypes.len())].clone();

        Some(SpawnRequest {
            position: Vec2::new(self.resolve_x(point.x), point.y),
            archetype,
        })
    }
}
