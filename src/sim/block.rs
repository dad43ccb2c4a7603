//! Block agents and their direction state machine
//!
//! A block occupies one lattice cell and travels one cell per tick. Its
//! whole behavior is the four-state direction machine: reverse on a wall
//! reflection, rotate clockwise on a block collision.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Travel direction along the grid lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step applied each tick (Up increases y toward the top row)
    #[inline]
    pub fn step(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, 1),
            Direction::Down => IVec2::new(0, -1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// 180° reversal, used on wall reflection
    #[inline]
    pub fn reversed(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// 90° clockwise rotation, used on block-block deflection
    #[inline]
    pub fn rotated_cw(&self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// True for Up/Down movers, whose reflections index the scale by column
    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Display color for rendering
    #[inline]
    pub fn color(&self) -> Color {
        match self {
            Direction::Up => Color::Blue,
            Direction::Down => Color::Green,
            Direction::Left => Color::Orange,
            Direction::Right => Color::Red,
        }
    }
}

/// Fixed direction-to-color map (rendering only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Green,
    Orange,
    Red,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Red => "red",
        }
    }

    /// sRGB fill value for renderers that want raw bytes
    pub fn rgb8(&self) -> [u8; 3] {
        match self {
            Color::Blue => [0, 0, 255],
            Color::Green => [0, 128, 0],
            Color::Orange => [255, 165, 0],
            Color::Red => [255, 0, 0],
        }
    }
}

/// A mobile block on the lattice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Lattice cell, 1-indexed on both axes
    pub pos: IVec2,
    pub direction: Direction,
    /// Identity flag for stationary wall pieces (reserved; spawned blocks
    /// are always mobile)
    pub is_wall: bool,
}

impl Block {
    pub fn new(pos: IVec2, direction: Direction) -> Self {
        Self {
            pos,
            direction,
            is_wall: false,
        }
    }

    /// Take one step in the current direction. The caller resolves walls
    /// and collisions first; this applies no bounds checking.
    pub fn advance(&mut self) {
        self.pos += self.direction.step();
    }

    /// Reflect off a wall: reverse direction and pick the note for this
    /// bounce. Vertical movers index the scale by column, horizontal movers
    /// by row, both using coordinate - 1.
    ///
    /// The config guarantees `scale.len() >= grid_size`, so a block inside
    /// the lattice can never index past the scale.
    pub fn reflect(&mut self, scale: &[u8]) -> u8 {
        let coord = if self.direction.is_vertical() {
            self.pos.x
        } else {
            self.pos.y
        };
        self.direction = self.direction.reversed();
        scale[(coord - 1) as usize]
    }

    /// Deflect off another block: rotate clockwise, no note
    pub fn deflect(&mut self) {
        self.direction = self.direction.rotated_cw();
    }

    /// Display color for the current direction
    #[inline]
    pub fn color(&self) -> Color {
        self.direction.color()
    }
}
