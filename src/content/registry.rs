//! ContentRegistry resource providing lookups for all loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;
use crate::enemy::EnemyTuning;

/// Central registry for all loaded game content.
#[derive(Resource, Debug, Default, Clone)]
pub struct ContentRegistry {
    pub characters: HashMap<String, CharacterDef>,
    pub enemies: HashMap<String, EnemyDef>,
    /// In play order
    pub levels: Vec<LevelDef>,
}

impl ContentRegistry {
    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded {} items:\n\
             - Characters: {}\n\
             - Enemies: {}\n\
             - Levels: {}",
            self.total_count(),
            self.characters.len(),
            self.enemies.len(),
            self.levels.len(),
        )
    }

    /// Returns total count of all loaded items.
    pub fn total_count(&self) -> usize {
        self.characters.len() + self.enemies.len() + self.levels.len()
    }

    /// Enemy stats keyed by archetype id, as the simulation consumes them.
    pub fn enemy_tunings(&self) -> HashMap<String, EnemyTuning> {
        self.enemies
            .iter()
            .map(|(id, def)| (id.clone(), def.stats.clone()))
            .collect()
    }
}
