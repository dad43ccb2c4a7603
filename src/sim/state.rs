//! Simulation state and its outward-facing views
//!
//! [`GridWorld`] exclusively owns the block collection; blocks hold no
//! reference back to it. Note events queue up during a tick and are drained
//! by the audio collaborator only after the tick completes.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::block::{Block, Color, Direction};
use crate::config::{Config, ConfigError};

/// A note-on message queued for the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteOn {
    /// MIDI pitch
    pub pitch: u8,
    /// Tick on which the reflection happened
    pub tick: u64,
}

/// Per-block render snapshot: cell, direction, fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockView {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
    pub color: Color,
}

/// The complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridWorld {
    pub(super) config: Config,
    /// Blocks in spawn order; only [`tick`](super::tick) mutates them
    pub(super) blocks: Vec<Block>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Notes queued during the current tick, drained afterward
    pub(super) events: Vec<NoteOn>,
}

impl GridWorld {
    /// Create an empty world, failing fast on an invalid configuration
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            blocks: Vec::new(),
            time_ticks: 0,
            events: Vec::new(),
        })
    }

    /// Create a world with one block on the center cell moving up
    pub fn with_center_block(config: Config) -> Result<Self, ConfigError> {
        let mut world = Self::new(config)?;
        let center = world.config.grid_size / 2 + 1;
        world.spawn(center, center, Direction::Up);
        Ok(world)
    }

    #[inline]
    pub fn grid_size(&self) -> i32 {
        self.config.grid_size
    }

    /// Canvas edge of one cell (rendering only)
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.config.cell_size()
    }

    #[inline]
    pub fn scale(&self) -> &[u8] {
        &self.config.scale
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Append a block at the given 1-indexed cell. Out-of-range requests
    /// come from untrusted pointer input and are silently dropped.
    ///
    /// Safe only between ticks, never mid-tick.
    pub fn spawn(&mut self, x: i32, y: i32, direction: Direction) {
        let range = 1..=self.config.grid_size;
        if !range.contains(&x) || !range.contains(&y) {
            log::debug!("Ignoring out-of-range spawn at ({x}, {y})");
            return;
        }
        self.blocks.push(Block::new(IVec2::new(x, y), direction));
    }

    /// Read-only view of the blocks, in spawn order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Render snapshot of every block, in spawn order
    pub fn snapshot(&self) -> Vec<BlockView> {
        self.blocks
            .iter()
            .map(|b| BlockView {
                x: b.pos.x,
                y: b.pos.y,
                direction: b.direction,
                color: b.color(),
            })
            .collect()
    }

    /// Take all notes queued since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<NoteOn> {
        std::mem::take(&mut self.events)
    }
}
