//! Core domain: shared resources for run configuration and scoring.

use bevy::prelude::*;
use rand::Rng;
use serde::Serialize;

#[derive(Resource, Debug, Clone)]
pub struct RunConfig {
    pub seed: u64,
    /// Character id; `None` picks the gameplay default
    pub character: Option<String>,
    /// Index into the registry's ordered level list
    pub level_index: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
            character: None,
            level_index: 0,
        }
    }
}

/// Receives points for every enemy defeated in combat.
pub trait ScoreSink {
    fn award(&mut self, points: u32);
}

/// Run-wide score.
#[derive(Resource, Debug, Default, Clone, PartialEq, Serialize)]
pub struct Score {
    pub points: u32,
    pub enemies_defeated: u32,
}

impl ScoreSink for Score {
    fn award(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
        self.enemies_defeated += 1;
    }
}

impl Score {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
