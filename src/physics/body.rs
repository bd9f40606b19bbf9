//! Physics domain: position/velocity state and integration.

use bevy::prelude::*;

use crate::core::{ConfigError, positive};
use crate::physics::PhysicsTuning;

/// Position, velocity and extent of a simulated entity.
///
/// Screen space with +y pointing down. `position` is the feet anchor: the
/// horizontal centre and bottom edge of the bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
}

impl KinematicBody {
    pub fn new(position: Vec2, width: f32, height: f32) -> Result<Self, ConfigError> {
        if !positive(width) || !positive(height) {
            return Err(ConfigError::BodySize { width, height });
        }

        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            size: Vec2::new(width, height),
            on_ground: false,
        })
    }

    /// Axis-aligned bounds, `min` is the top-left corner.
    pub fn bounds(&self) -> Rect {
        let half_width = self.size.x * 0.5;
        Rect::new(
            self.position.x - half_width,
            self.position.y - self.size.y,
            self.position.x + half_width,
            self.position.y,
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y - self.size.y * 0.5)
    }

    pub fn half_width(&self) -> f32 {
        self.size.x * 0.5
    }

    /// Apply gravity, clamp the fall speed, then move by the current velocity.
    ///
    /// Horizontal velocity must already be decided for this frame.
    pub fn integrate(&mut self, dt: f32, physics: &PhysicsTuning) {
        self.velocity.y += physics.gravity * dt;
        if self.velocity.y > physics.max_fall_speed {
            self.velocity.y = physics.max_fall_speed;
        }

        self.position += self.velocity * dt;
    }

    /// Snap the feet onto a surface and stop falling.
    pub fn land_on(&mut self, top: f32) {
        self.position.y = top;
        self.velocity.y = 0.0;
        self.on_ground = true;
    }

    /// Place the body at a spawn point with no motion.
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.on_ground = false;
    }
}
