//! Level domain: platform rectangles and the top-only landing resolver.

use bevy::prelude::*;

use crate::content::LevelDef;
use crate::core::{ConfigError, positive};
use crate::level::DEATH_ZONE_MARGIN;
use crate::physics::KinematicBody;

/// Boundary rectangles extend this far so fast bodies cannot skip past them.
const BOUNDARY_EXTENT: f32 = 1.0e6;

/// Strict overlap; rectangles that only share an edge do not overlap.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}

/// Result of a successful landing query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Index into `LevelGeometry::platforms`
    pub platform: usize,
    pub top: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryContact {
    LeftWall,
    RightWall,
    DeathZone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boundaries {
    pub left_wall: Rect,
    pub right_wall: Rect,
    pub death_zone: Rect,
}

impl Boundaries {
    fn for_level(width: f32, height: f32) -> Self {
        Self {
            left_wall: Rect::new(-BOUNDARY_EXTENT, -BOUNDARY_EXTENT, 0.0, BOUNDARY_EXTENT),
            right_wall: Rect::new(width, -BOUNDARY_EXTENT, width + BOUNDARY_EXTENT, BOUNDARY_EXTENT),
            death_zone: Rect::new(
                -BOUNDARY_EXTENT,
                height + DEATH_ZONE_MARGIN,
                width + BOUNDARY_EXTENT,
                BOUNDARY_EXTENT,
            ),
        }
    }
}

/// Immutable collision geometry for one level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelGeometry {
    width: f32,
    height: f32,
    platforms: Vec<Rect>,
    boundaries: Boundaries,
}

impl LevelGeometry {
    pub fn new(width: f32, height: f32, platforms: Vec<Rect>) -> Result<Self, ConfigError> {
        if !positive(width) || !positive(height) {
            return Err(ConfigError::LevelSize { width, height });
        }

        Ok(Self {
            width,
            height,
            platforms,
            boundaries: Boundaries::for_level(width, height),
        })
    }

    pub fn from_def(def: &LevelDef) -> Result<Self, ConfigError> {
        let platforms = def
            .platforms
            .iter()
            .map(|p| Rect::new(p.x, p.y, p.x + p.width, p.y + p.height))
            .collect();
        Self::new(def.width, def.height, platforms)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn boundaries(&self) -> &Boundaries {
        &self.boundaries
    }

    /// Find the first platform the rectangle is falling into.
    ///
    /// Only downward motion lands: a body rising through a platform passes
    /// through it, and side or underside contact is never resolved. There is
    /// no swept test, so a body moving far enough in one frame can skip a thin
    /// platform entirely.
    pub fn find_landing(&self, bounds: Rect, velocity_y: f32) -> Option<Landing> {
        if velocity_y <= 0.0 {
            return None;
        }

        self.platforms
            .iter()
            .enumerate()
            .find(|(_, platform)| overlaps(bounds, **platform))
            .map(|(index, platform)| Landing {
                platform: index,
                top: platform.min.y,
            })
    }

    /// Resolve a body against the platforms, updating its grounded flag.
    pub fn resolve(&self, body: &mut KinematicBody) -> Option<Landing> {
        let landing = self.find_landing(body.bounds(), body.velocity.y);
        match landing {
            Some(hit) => body.land_on(hit.top),
            None => body.on_ground = false,
        }
        landing
    }

    /// Report which boundary the rectangle touches, death zone first.
    pub fn boundary_contact(&self, bounds: Rect) -> Option<BoundaryContact> {
        if overlaps(bounds, self.boundaries.death_zone) {
            Some(BoundaryContact::DeathZone)
        } else if overlaps(bounds, self.boundaries.left_wall) {
            Some(BoundaryContact::LeftWall)
        } else if overlaps(bounds, self.boundaries.right_wall) {
            Some(BoundaryContact::RightWall)
        } else {
            None
        }
    }

    /// Push a body back inside the side walls. Returns the death zone contact
    /// untouched so the caller can decide what dying means for that entity.
    pub fn constrain(&self, body: &mut KinematicBody) -> Option<BoundaryContact> {
        let contact = self.boundary_contact(body.bounds())?;
        match contact {
            BoundaryContact::LeftWall => {
                body.position.x = self.boundaries.left_wall.max.x + body.half_width();
                body.velocity.x = body.velocity.x.max(0.0);
            }
            BoundaryContact::RightWall => {
                body.position.x = self.boundaries.right_wall.min.x - body.half_width();
                body.velocity.x = body.velocity.x.min(0.0);
            }
            BoundaryContact::DeathZone => {}
        }
        Some(contact)
    }
}
