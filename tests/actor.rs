use std::time::Duration;

use glam::{IVec2, Vec2};
use munch_maze::entity::actor::Actor;
use munch_maze::entity::muncher::{Muncher, MuncherState};
use munch_maze::map::direction::Direction;
use speculoos::prelude::*;

mod common;

const STEP: Duration = Duration::from_millis(400);

fn close(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < 1e-3
}

#[test]
fn test_transit_interpolates_then_snaps() {
    let maze = common::open_maze(6, 4);
    let mut actor = Actor::new(IVec2::new(1, 1), Direction::Left, 10.0, STEP);

    assert_that(&actor.start_move(&maze, Direction::Right)).is_true();
    assert_that(&actor.facing()).is_equal_to(Direction::Right);
    // The discrete cell stays put until the transit completes.
    assert_that(&actor.cell()).is_equal_to(IVec2::new(1, 1));

    assert_that(&actor.advance(Duration::from_millis(100))).is_false();
    assert!(close(actor.render_position(), Vec2::new(12.5, 10.0)));
    assert_that(&actor.cell()).is_equal_to(IVec2::new(1, 1));

    assert_that(&actor.advance(Duration::from_millis(300))).is_true();
    assert_that(&actor.cell()).is_equal_to(IVec2::new(2, 1));
    assert_that(&actor.render_position()).is_equal_to(Vec2::new(20.0, 10.0));
    assert_that(&actor.is_moving()).is_false();
}

#[test]
fn test_one_transit_at_a_time() {
    let maze = common::open_maze(6, 4);
    let mut actor = Actor::new(IVec2::new(2, 2), Direction::Right, 1.0, STEP);

    assert_that(&actor.start_move(&maze, Direction::Up)).is_true();
    assert_that(&actor.start_move(&maze, Direction::Down)).is_false();
    assert_that(&actor.facing()).is_equal_to(Direction::Up);
    assert_that(&actor.transit().map(|t| t.to)).is_equal_to(Some(IVec2::new(2, 1)));
}

#[test]
fn test_illegal_move_changes_nothing() {
    let maze = common::open_maze(6, 4);
    let mut actor = Actor::new(IVec2::new(1, 1), Direction::Right, 1.0, STEP);

    assert_that(&actor.can_move(&maze, Direction::Up)).is_false();
    assert_that(&actor.start_move(&maze, Direction::Up)).is_false();
    assert_that(&actor.facing()).is_equal_to(Direction::Right);
    assert_that(&actor.is_moving()).is_false();
}

#[test]
fn test_overshooting_dt_still_lands_on_the_next_cell() {
    let maze = common::open_maze(6, 4);
    let mut actor = Actor::new(IVec2::new(1, 1), Direction::Right, 1.0, STEP);
    actor.start_move(&maze, Direction::Right);

    assert_that(&actor.advance(Duration::from_secs(5))).is_true();
    assert_that(&actor.cell()).is_equal_to(IVec2::new(2, 1));
}

#[test]
fn test_muncher_states() {
    let maze = common::open_maze(6, 4);
    let mut muncher = Muncher::new(IVec2::new(1, 1), 1.0, common::PLAYER_STEP);
    assert_that(&muncher.state()).is_equal_to(MuncherState::Idle);

    assert_that(&muncher.start_move(&maze, Direction::Right)).is_true();
    assert_that(&muncher.state()).is_equal_to(MuncherState::Moving);
    assert_that(&muncher.advance(common::PLAYER_STEP)).is_true();
    assert_that(&muncher.state()).is_equal_to(MuncherState::Idle);

    muncher.kill();
    assert_that(&muncher.state()).is_equal_to(MuncherState::Dying);
    assert_that(&muncher.start_move(&maze, Direction::Right)).is_false();
}
