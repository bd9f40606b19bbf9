//! Enemy domain: distance-driven state selection.

use serde::{Serialize, Serializer};

use crate::enemy::EnemyTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiState {
    #[default]
    Patrol,
    Chase,
    Attack,
}

impl AiState {
    pub fn label(self) -> &'static str {
        match self {
            AiState::Patrol => "PATROL",
            AiState::Chase => "CHASE",
            AiState::Attack => "ATTACK",
        }
    }
}

impl Serialize for AiState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Pick the AI state from the absolute distances to the player.
///
/// Recomputed from scratch every frame; the previous state plays no part.
pub fn decide_state(dx: f32, dy: f32, tuning: &EnemyTuning) -> AiState {
    let (dx, dy) = (dx.abs(), dy.abs());
    if dx < tuning.attack_range && dy < tuning.vertical_proximity {
        AiState::Attack
    } else if dx < tuning.detection_range {
        AiState::Chase
    } else {
        AiState::Patrol
    }
}
