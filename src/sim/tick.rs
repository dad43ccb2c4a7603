//! One discrete simulation step
//!
//! All blocks advance exactly one cell per tick. Classification runs
//! against a snapshot of positions captured before any block moves, so no
//! block's move can influence another's outcome within the same tick.

use glam::IVec2;

use super::collision::{Outcome, classify};
use super::state::{GridWorld, NoteOn};

/// Advance the world by one tick. Each block is resolved in spawn order:
/// wall hits reflect and queue a note, shared cells deflect clockwise,
/// everything else just moves. Queued notes stay in the world until the
/// audio collaborator drains them after the tick.
pub fn tick(world: &mut GridWorld) {
    world.time_ticks += 1;

    let snapshot: Vec<IVec2> = world.blocks.iter().map(|b| b.pos).collect();
    let grid_size = world.config.grid_size;
    let scale = &world.config.scale;
    let now = world.time_ticks;

    for block in world.blocks.iter_mut() {
        match classify(block.pos, block.direction, grid_size, &snapshot) {
            Outcome::WallHit => {
                let pitch = block.reflect(scale);
                world.events.push(NoteOn { pitch, tick: now });
            }
            Outcome::BlockHit => block.deflect(),
            Outcome::Free => {}
        }
        block.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::Direction;
    use proptest::prelude::*;

    fn world() -> GridWorld {
        GridWorld::new(Config::default()).unwrap()
    }

    #[test]
    fn test_tick_with_no_blocks_is_a_noop() {
        let mut w = world();
        tick(&mut w);
        assert!(w.snapshot().is_empty());
        assert!(w.drain_events().is_empty());
        assert_eq!(w.time_ticks, 1);
    }

    #[test]
    fn test_free_block_moves_one_cell() {
        let mut w = world();
        w.spawn(4, 4, Direction::Right);
        tick(&mut w);
        assert_eq!(w.blocks()[0].pos, IVec2::new(5, 4));
        assert!(w.drain_events().is_empty());
    }

    #[test]
    fn test_right_mover_reflects_off_right_wall_same_tick() {
        let mut w = world();
        w.spawn(9, 5, Direction::Right);
        tick(&mut w);
        let block = &w.blocks()[0];
        assert_eq!(block.direction, Direction::Left);
        assert_eq!(block.pos, IVec2::new(8, 5));
        // Horizontal mover at y=5 plays scale index 4
        assert_eq!(w.drain_events(), vec![NoteOn { pitch: 69, tick: 1 }]);
    }

    #[test]
    fn test_up_mover_reflects_off_top_wall_same_tick() {
        let mut w = world();
        w.spawn(5, 9, Direction::Up);
        tick(&mut w);
        let block = &w.blocks()[0];
        assert_eq!(block.direction, Direction::Down);
        assert_eq!(block.pos, IVec2::new(5, 8));
    }

    #[test]
    fn test_vertical_reflection_at_column_three_plays_pitch_63() {
        let mut w = world();
        w.spawn(3, 9, Direction::Up);
        tick(&mut w);
        assert_eq!(w.drain_events()[0].pitch, 63);
    }

    #[test]
    fn test_shared_cell_deflects_both_blocks_same_tick() {
        let mut w = world();
        w.spawn(5, 5, Direction::Up);
        w.spawn(5, 5, Direction::Right);
        tick(&mut w);
        // Up -> Left, Right -> Up, then both move
        assert_eq!(w.blocks()[0].direction, Direction::Left);
        assert_eq!(w.blocks()[0].pos, IVec2::new(4, 5));
        assert_eq!(w.blocks()[1].direction, Direction::Up);
        assert_eq!(w.blocks()[1].pos, IVec2::new(5, 6));
        // Deflections are silent
        assert!(w.drain_events().is_empty());
    }

    #[test]
    fn test_wall_hit_wins_over_shared_cell() {
        let mut w = world();
        w.spawn(9, 5, Direction::Right);
        w.spawn(9, 5, Direction::Up);
        tick(&mut w);
        // The outward mover reflects (and plays), the other deflects
        assert_eq!(w.blocks()[0].direction, Direction::Left);
        assert_eq!(w.blocks()[0].pos, IVec2::new(8, 5));
        assert_eq!(w.blocks()[1].direction, Direction::Left);
        assert_eq!(w.blocks()[1].pos, IVec2::new(8, 5));
        assert_eq!(w.drain_events().len(), 1);
    }

    #[test]
    fn test_classification_uses_pre_tick_positions() {
        // A block moving into a cell vacated this tick must not deflect
        let mut w = world();
        w.spawn(4, 5, Direction::Right);
        w.spawn(5, 5, Direction::Right);
        tick(&mut w);
        assert_eq!(w.blocks()[0].direction, Direction::Right);
        assert_eq!(w.blocks()[0].pos, IVec2::new(5, 5));
        assert_eq!(w.blocks()[1].pos, IVec2::new(6, 5));
    }

    #[test]
    fn test_boundary_spawn_classifies_on_next_tick_only() {
        let mut w = world();
        w.spawn(9, 5, Direction::Right);
        // Spawning alone changes nothing until the next tick
        assert_eq!(w.blocks()[0].pos, IVec2::new(9, 5));
        assert_eq!(w.blocks()[0].direction, Direction::Right);
        assert!(w.drain_events().is_empty());
    }

    #[test]
    fn test_lone_block_bounces_forever_in_bounds() {
        let mut w = GridWorld::with_center_block(Config::default()).unwrap();
        for _ in 0..1000 {
            tick(&mut w);
            let pos = w.blocks()[0].pos;
            assert!((1..=9).contains(&pos.x) && (1..=9).contains(&pos.y));
        }
        // A vertical bouncer crosses a 9-cell column every 8 ticks
        assert_eq!(w.drain_events().len(), 1000 / 8);
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        /// Positions stay within [1, grid_size] on both axes after every
        /// tick, for any spawn pattern.
        #[test]
        fn prop_blocks_stay_in_bounds(
            spawns in prop::collection::vec((1..=9i32, 1..=9i32, arb_direction()), 1..12),
            ticks in 1..200usize,
        ) {
            let mut w = world();
            for (x, y, dir) in spawns {
                w.spawn(x, y, dir);
            }
            for _ in 0..ticks {
                tick(&mut w);
                for block in w.blocks() {
                    prop_assert!((1..=9).contains(&block.pos.x));
                    prop_assert!((1..=9).contains(&block.pos.y));
                }
            }
        }

        /// Every queued pitch belongs to the configured scale.
        #[test]
        fn prop_notes_come_from_the_scale(
            spawns in prop::collection::vec((1..=9i32, 1..=9i32, arb_direction()), 1..8),
            ticks in 1..100usize,
        ) {
            let mut w = world();
            for (x, y, dir) in spawns {
                w.spawn(x, y, dir);
            }
            for _ in 0..ticks {
                tick(&mut w);
            }
            let scale = w.scale().to_vec();
            for note in w.drain_events() {
                prop_assert!(scale.contains(&note.pitch));
            }
        }
    }
}
