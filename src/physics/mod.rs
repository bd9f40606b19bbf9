//! Physics domain: kinematic bodies and the shared gravity integration step.

mod body;

#[cfg(test)]
mod tests;

pub use body::KinematicBody;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Facing toward a horizontal delta; `None` when there is no direction.
    pub fn from_delta(dx: f32) -> Option<Self> {
        if dx > 0.0 {
            Some(Facing::Right)
        } else if dx < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// World constants shared by every physical entity.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Downward acceleration in pixels per second squared
    pub gravity: f32,
    /// Terminal downward speed in pixels per second
    pub max_fall_speed: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 1500.0,
            max_fall_speed: 800.0,
        }
    }
}
