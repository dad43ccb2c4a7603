//! Per-tick collision classification
//!
//! Every block resolves to exactly one outcome per tick, evaluated against
//! a snapshot of positions captured before any block has moved. A block on
//! the boundary about to step outward is a wall hit even when it also
//! shares its cell with another block.

use glam::IVec2;

use super::block::Direction;

/// Outcome of classifying one block for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// On a boundary cell, facing outward: reflect and play a note
    WallHit,
    /// Sharing a cell with at least one other block: deflect clockwise
    BlockHit,
    /// Clear path: just move
    Free,
}

/// True when a block sits on a boundary cell facing outward in its travel
/// direction.
pub fn is_wall_hit(pos: IVec2, direction: Direction, grid_size: i32) -> bool {
    match direction {
        Direction::Left => pos.x == 1,
        Direction::Down => pos.y == 1,
        Direction::Right => pos.x == grid_size,
        Direction::Up => pos.y == grid_size,
    }
}

/// True when two or more snapshot positions occupy `pos` (the snapshot
/// includes the block being classified, so a shared cell counts twice).
pub fn is_block_collision(pos: IVec2, snapshot: &[IVec2]) -> bool {
    snapshot.iter().filter(|&&p| p == pos).count() >= 2
}

/// Classify one block against the pre-tick snapshot. Wall hits take
/// priority over block collisions.
pub fn classify(pos: IVec2, direction: Direction, grid_size: i32, snapshot: &[IVec2]) -> Outcome {
    if is_wall_hit(pos, direction, grid_size) {
        Outcome::WallHit
    } else if is_block_collision(pos, snapshot) {
        Outcome::BlockHit
    } else {
        Outcome::Free
    }
}
