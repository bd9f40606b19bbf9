//! Enemy domain: patrol/chase/attack AI and enemy tuning.

mod ai;
mod controller;
mod resources;

#[cfg(test)]
mod tests;

pub use ai::{AiState, decide_state};
pub use controller::EnemyEntity;
pub use resources::EnemyTuning;

use serde::Serialize;

/// Enemy handle, unique until the session restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EnemyId(pub u32);
