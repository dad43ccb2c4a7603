//! Deterministic simulation module
//!
//! All block movement and collision logic lives here. This module must be
//! pure and deterministic:
//! - One discrete step per tick, every block advances one cell
//! - Stable resolution order (spawn order) against a pre-tick snapshot
//! - No rendering or audio dependencies; notes are queued, not played

pub mod block;
pub mod collision;
pub mod state;
pub mod tick;

pub use block::{Block, Color, Direction};
pub use collision::{Outcome, classify, is_block_collision, is_wall_hit};
pub use state::{BlockView, GridWorld, NoteOn};
pub use tick::tick;
