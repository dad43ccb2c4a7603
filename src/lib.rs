//! Avant Blocks - a generative grid music toy
//!
//! Mobile blocks travel along a square lattice, bounce off the walls and
//! each other, and play a note from a fixed scale every time they reflect.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, note events)
//! - `config`: Immutable setup (grid size, tempo, scale)
//! - `audio`: Note-event consumer seam for external synths
//!
//! Rendering and sound synthesis live outside this crate; the simulation
//! exposes per-tick block snapshots and queued note-on events for them.

pub mod audio;
pub mod config;
pub mod sim;

pub use config::{Config, ConfigError, Subdivision};
pub use sim::{Block, BlockView, Direction, GridWorld, NoteOn, tick};

use glam::{IVec2, Vec2};

/// Default setup constants
pub mod consts {
    /// Lattice cells per side (9x9, matching the 9-note scales)
    pub const DEFAULT_GRID_SIZE: i32 = 9;
    /// Square canvas edge in pixels (rendering only)
    pub const DEFAULT_CANVAS_SIZE: f32 = 512.0;
    /// Default tempo
    pub const DEFAULT_BPM: u32 = 150;
}

/// Convert a MIDI note number to frequency in Hz (A440 equal temperament)
#[inline]
pub fn midi_to_freq(note: u8) -> f32 {
    440.0 * 2f32.powf((note as f32 - 69.0) / 12.0)
}

/// Top-left canvas corner of a lattice cell, with the vertical axis flipped
/// so cell (1, 1) renders at the bottom-left of the canvas.
#[inline]
pub fn cell_to_canvas(cell: IVec2, grid_size: i32, cell_size: f32) -> Vec2 {
    let bottom = cell_size * grid_size as f32;
    Vec2::new(
        (cell.x - 1) as f32 * cell_size,
        bottom - cell.y as f32 * cell_size,
    )
}

/// Convert a canvas position (e.g. a pointer click) to the lattice cell
/// containing it, clamped to [1, grid_size] on both axes.
#[inline]
pub fn canvas_to_cell(pos: Vec2, grid_size: i32, cell_size: f32) -> IVec2 {
    let bottom = cell_size * grid_size as f32;
    let x = (pos.x / cell_size).floor() as i32 + 1;
    let y = ((bottom - pos.y) / cell_size).floor() as i32 + 1;
    IVec2::new(x.clamp(1, grid_size), y.clamp(1, grid_size))
}
