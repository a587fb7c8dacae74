use std::time::Duration;

use glam::IVec2;
use munch_maze::ai::mode::{ModeTimings, ModeTransition};
use munch_maze::ai::targeting::{ScatterCorners, TargetingParams};
use munch_maze::ai::{GhostAi, Mode};
use munch_maze::entity::ghost::{GhostState, GhostType};
use munch_maze::map::direction::Direction;
use speculoos::prelude::*;

mod common;

use common::{ghost, ghost_away_from_spawn, StubPlayer};

#[test]
fn test_initial_mode_is_scatter() {
    let maze = common::open_maze(12, 8);
    let ai = common::ghost_ai_for(&maze);
    assert_that(&ai.current_mode()).is_equal_to(Mode::Scatter);
}

#[test]
fn test_scatter_heads_for_corner() {
    let maze = common::open_maze(12, 8);
    let mut ai = common::ghost_ai_for(&maze);
    let mut ghosts = vec![ghost(GhostType::Jack, 5, 5)];
    let player = StubPlayer::at(9, 5, Direction::Left);

    ai.update(&mut ghosts, &player, &maze, Duration::ZERO);

    // Corner (1, 1): Up lands 5.0 away, Down and Right about 6.4.
    assert_that(&ghosts[0].actor.facing()).is_equal_to(Direction::Up);
    assert_that(&ghosts[0].actor.transit().map(|t| t.to)).is_equal_to(Some(IVec2::new(5, 4)));
}

#[test]
fn test_chase_uses_new_mode_in_the_same_update() {
    let maze = common::open_maze(12, 8);
    let mut ai = common::ghost_ai_for(&maze);
    let mut ghosts = vec![ghost(GhostType::Jack, 5, 5)];
    let player = StubPlayer::at(9, 5, Direction::Left);

    let transition = ai.update(&mut ghosts, &player, &maze, Duration::from_secs(7));

    assert_that(&transition).is_equal_to(Some(ModeTransition {
        from: Mode::Scatter,
        to: Mode::Chase,
    }));
    assert_that(&ghosts[0].actor.facing()).is_equal_to(Direction::Right);
}

#[test]
fn test_moving_ghosts_are_left_alone() {
    let maze = common::open_maze(12, 8);
    let mut ai = common::ghost_ai_for(&maze);
    let mut ghosts = vec![ghost(GhostType::Mike, 5, 5)];
    let player = StubPlayer::at(9, 5, Direction::Left);
    ghosts[0].actor.start_move(&maze, Direction::Down);

    ai.update(&mut ghosts, &player, &maze, Duration::ZERO);

    assert_that(&ghosts[0].actor.facing()).is_equal_to(Direction::Down);
    assert_that(&ghosts[0].actor.transit().map(|t| t.to)).is_equal_to(Some(IVec2::new(5, 6)));
}

#[test]
fn test_power_item_frightens_mode_and_ghosts_together() {
    let maze = common::open_maze(12, 8);
    let mut ai = common::ghost_ai_for(&maze);
    let mut ghosts = vec![
        ghost(GhostType::Jack, 5, 5),
        ghost_away_from_spawn(GhostType::Mike, IVec2::new(9, 2), IVec2::new(2, 2)),
    ];
    let player = StubPlayer::at(9, 5, Direction::Left);
    ghosts[1].notify_captured();

    let transition = ai.notify_power_item_consumed(&mut ghosts);
    assert_that(&transition.from).is_equal_to(Mode::Scatter);
    assert_that(&transition.to).is_equal_to(Mode::Frightened);
    assert_that(&ai.current_mode()).is_equal_to(Mode::Frightened);
    assert_that(&ghosts[0].state()).is_equal_to(GhostState::Frightened);
    assert_that(&ghosts[1].state()).is_equal_to(GhostState::Returning);

    let transition = ai.update(&mut ghosts, &player, &maze, Duration::from_secs(10));
    assert_that(&transition.map(|t| t.to)).is_equal_to(Some(Mode::Chase));
    assert_that(&ai.current_mode()).is_equal_to(Mode::Chase);
    assert_that(&ghosts[0].state()).is_equal_to(GhostState::Normal);
    assert_that(&ghosts[1].state()).is_equal_to(GhostState::Returning);
}

#[test]
fn test_frightened_wandering_never_reverses() {
    let maze = common::open_maze(12, 8);
    let player = StubPlayer::at(9, 5, Direction::Left);

    for seed in 0..200 {
        let mut ai = GhostAi::with_seed(
            ModeTimings::default(),
            ScatterCorners::for_dimensions(12, 8),
            TargetingParams::default(),
            seed,
        );
        let mut ghosts = vec![ghost(GhostType::Will, 5, 4)];
        ai.notify_power_item_consumed(&mut ghosts);
        ai.update(&mut ghosts, &player, &maze, Duration::ZERO);

        assert_that(&ghosts[0].state()).is_equal_to(GhostState::Frightened);
        assert_that(&ghosts[0].actor.is_moving()).is_true();
        assert_that(&ghosts[0].actor.facing()).is_not_equal_to(Direction::Left);
    }
}

#[test]
fn test_target_tile_per_mode() {
    let maze = common::open_maze(28, 31);
    let mut ai = common::ghost_ai_for(&maze);
    let sam = ghost(GhostType::Sam, 3, 3);
    let player = StubPlayer::at(10, 10, Direction::Right);

    assert_that(&ai.target_tile(&sam, &player, None)).is_equal_to(Some(IVec2::new(1, 29)));

    ai.update(&mut [], &player, &maze, Duration::from_secs(7));
    assert_that(&ai.target_tile(&sam, &player, Some(IVec2::new(8, 10)))).is_equal_to(Some(IVec2::new(16, 10)));
    assert_that(&ai.target_tile(&sam, &player, None)).is_equal_to(Some(IVec2::new(10, 10)));

    ai.notify_power_item_consumed(&mut []);
    assert_that(&ai.target_tile(&sam, &player, None)).is_none();
}

#[test]
fn test_fickle_uses_the_chaser_on_the_board() {
    let maze = common::open_maze(28, 31);
    let mut ai = common::ghost_ai_for(&maze);
    // Chaser at (8, 10), player at (10, 10) facing right: Fickle aims for (16, 10).
    let mut ghosts = vec![ghost(GhostType::Jack, 8, 10), ghost(GhostType::Sam, 13, 12)];
    let player = StubPlayer::at(10, 10, Direction::Right);

    ai.update(&mut ghosts, &player, &maze, Duration::from_secs(7));

    // Right lands 2.83 from (16, 10). Chasing the player cell instead would have picked Up.
    assert_that(&ghosts[1].actor.facing()).is_equal_to(Direction::Right);
}
