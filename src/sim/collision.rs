//! Tile collision queries
//!
//! Binary hit test only: no penetration depth or push-out vector. Movement
//! code reverts to the last clear position instead.

use super::body::Body;
use super::kinematics::Rect;
use super::level::TileGrid;
use crate::consts::TILE_SIZE;

/// Anything that can answer "does this box overlap a blocking tile"
pub trait TileCollider {
    fn collides(&self, bounds: &Rect) -> bool;
}

/// Inclusive cell range `(col_min, row_min, col_max, row_max)` covered by a rect.
///
/// Cell `c` spans `[c * TILE_SIZE, (c + 1) * TILE_SIZE)`, so a rect whose right
/// edge lies exactly on a tile boundary does not reach the next column.
pub fn overlapping_cells(bounds: &Rect) -> (i32, i32, i32, i32) {
    let col_min = (bounds.x / TILE_SIZE).floor() as i32;
    let row_min = (bounds.y / TILE_SIZE).floor() as i32;
    let col_max = ((bounds.right() / TILE_SIZE).ceil() as i32 - 1).max(col_min);
    let row_max = ((bounds.bottom() / TILE_SIZE).ceil() as i32 - 1).max(row_min);
    (col_min, row_min, col_max, row_max)
}

impl TileCollider for TileGrid {
    fn collides(&self, bounds: &Rect) -> bool {
        let (col_min, row_min, col_max, row_max) = overlapping_cells(bounds);
        (row_min..=row_max)
            .any(|row| (col_min..=col_max).any(|col| self.is_solid_cell(col, row)))
    }
}

/// Test a body's current bounding box against the level
pub fn check_tile_collision<B, L>(body: &B, level: &L) -> bool
where
    B: Body + ?Sized,
    L: TileCollider + ?Sized,
{
    level.collides(&body.bounds())
}
