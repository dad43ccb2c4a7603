//! Avant Blocks headless demo
//!
//! Runs the simulation at the configured tempo and logs every note-on.
//! Rendering and synthesis front-ends drive the library the same way:
//! spawn at frame boundaries, tick, drain events.

use std::thread;

use avant_blocks::audio::{LogSink, NoteSink, Patch};
use avant_blocks::sim::{Direction, GridWorld, tick};
use avant_blocks::{Config, ConfigError};

/// Ticks to run before exiting (64 bars of eighth notes at the default 9x9)
const DEMO_TICKS: u64 = 512;

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let config = Config::default();
    log::info!(
        "Avant Blocks: {0}x{0} grid, {1} bpm, {2} cells, {3} ticks/sec",
        config.grid_size,
        config.bpm,
        config.subdivision.as_str(),
        config.ticks_per_second(),
    );

    let interval = config.tick_interval();
    let mut world = GridWorld::with_center_block(config)?;
    // A couple of extra voices so wall bounces and deflections both happen
    world.spawn(2, 7, Direction::Right);
    world.spawn(8, 3, Direction::Left);

    let mut sink = LogSink;
    let patch = Patch::default();

    for _ in 0..DEMO_TICKS {
        tick(&mut world);
        sink.play_all(world.drain_events(), &patch);
        thread::sleep(interval);
    }

    log::info!("Done after {} ticks", world.time_ticks);
    Ok(())
}
