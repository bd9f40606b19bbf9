//! Combat domain: attack hitbox placement.

use bevy::prelude::*;

use crate::combat::HitboxShape;
use crate::physics::Facing;

/// Place a hitbox against the owner's leading edge.
///
/// Facing right the hitbox starts at the owner's right edge; facing left it
/// ends at the owner's left edge. Vertically it hangs `offset_y` below the
/// owner's top.
pub fn place_hitbox(owner: Rect, facing: Facing, shape: &HitboxShape) -> Rect {
    let x0 = match facing {
        Facing::Right => owner.max.x,
        Facing::Left => owner.min.x - shape.width,
    };
    let y0 = owner.min.y + shape.offset_y;
    Rect::new(x0, y0, x0 + shape.width, y0 + shape.height)
}
