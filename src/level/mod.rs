//! Level domain: static platform geometry, boundaries and enemy spawning.

mod geometry;
mod spawner;

#[cfg(test)]
mod tests;

pub use geometry::{BoundaryContact, Boundaries, Landing, LevelGeometry, overlaps};
pub use spawner::{EnemySpawner, SpawnRequest};

/// Distance below the level floor at which bodies are considered lost
pub const DEATH_ZONE_MARGIN: f32 = 100.0;
/// Inset from the level edges for `Left`/`Right` spawn points
pub const EDGE_SPAWN_MARGIN: f32 = 80.0;
