//! Simulation configuration
//!
//! Everything the sketch used to keep in globals (grid size, tempo, scale)
//! lives in one immutable [`Config`] validated at construction.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_BPM, DEFAULT_CANVAS_SIZE, DEFAULT_GRID_SIZE};

/// C Akebono, one note per grid column/row of the default 9x9 lattice
pub const SCALE_C_AKEBONO: [u8; 9] = [60, 62, 63, 67, 69, 72, 74, 75, 79];

/// A minor, same span
pub const SCALE_A_MINOR: [u8; 9] = [57, 60, 62, 64, 67, 69, 72, 74, 76];

/// Configuration rejected at construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size {0} is below the minimum of 3")]
    GridTooSmall(i32),
    #[error("scale has {scale_len} notes but the grid needs {grid_size}")]
    ScaleTooShort { scale_len: usize, grid_size: i32 },
    #[error("bpm must be positive")]
    ZeroBpm,
}

/// Note value of one grid cell, relative to a quarter-note beat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Subdivision {
    Quarter,
    #[default]
    Eighth,
    Sixteenth,
}

impl Subdivision {
    /// Ticks per beat
    pub fn per_beat(&self) -> u32 {
        match self {
            Subdivision::Quarter => 1,
            Subdivision::Eighth => 2,
            Subdivision::Sixteenth => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Subdivision::Quarter => "1/4",
            Subdivision::Eighth => "1/8",
            Subdivision::Sixteenth => "1/16",
        }
    }
}

/// Immutable simulation setup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Lattice cells per side
    pub grid_size: i32,
    /// Square canvas edge in pixels (rendering only)
    pub canvas_size: f32,
    /// Tempo in beats per minute
    pub bpm: u32,
    /// Note value of one tick
    pub subdivision: Subdivision,
    /// MIDI pitches indexed by lattice coordinate - 1
    pub scale: Vec<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            canvas_size: DEFAULT_CANVAS_SIZE,
            bpm: DEFAULT_BPM,
            subdivision: Subdivision::Eighth,
            scale: SCALE_C_AKEBONO.to_vec(),
        }
    }
}

impl Config {
    /// Validate the configuration, failing fast on anything a tick could
    /// not tolerate (a reflection must never index past the scale).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 3 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.scale.len() < self.grid_size as usize {
            return Err(ConfigError::ScaleTooShort {
                scale_len: self.scale.len(),
                grid_size: self.grid_size,
            });
        }
        if self.bpm == 0 {
            return Err(ConfigError::ZeroBpm);
        }
        Ok(())
    }

    /// Canvas edge of one lattice cell
    pub fn cell_size(&self) -> f32 {
        self.canvas_size / self.grid_size as f32
    }

    /// Simulation ticks per second (one tick per subdivision of the beat)
    pub fn ticks_per_second(&self) -> f32 {
        self.subdivision.per_beat() as f32 * self.bpm as f32 / 60.0
    }

    /// Wall-clock interval between ticks, for the frame scheduler
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.ticks_per_second())
    }
}
