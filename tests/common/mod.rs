#![allow(dead_code)]

use std::time::Duration;

use bevy_ecs::world::World;
use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use munch_maze::ai::mode::ModeTimings;
use munch_maze::ai::targeting::{ScatterCorners, TargetingParams};
use munch_maze::ai::GhostAi;
use munch_maze::entity::ghost::{Ghost, GhostType};
use munch_maze::entity::muncher::Muncher;
use munch_maze::entity::PlayerView;
use munch_maze::map::direction::Direction;
use munch_maze::map::maze::{Maze, Occupancy};
use munch_maze::systems::{Autopilot, DeltaTime, Ghosts, SimStats};

pub const GHOST_STEP: Duration = Duration::from_millis(400);
pub const PLAYER_STEP: Duration = Duration::from_millis(300);
pub const SEED: u64 = 0x5EED;

/// A fixed player position for decision tests.
#[derive(Debug, Clone, Copy)]
pub struct StubPlayer {
    pub cell: IVec2,
    pub facing: Direction,
}

impl StubPlayer {
    pub fn at(x: i32, y: i32, facing: Direction) -> Self {
        Self {
            cell: IVec2::new(x, y),
            facing,
        }
    }
}

impl PlayerView for StubPlayer {
    fn cell(&self) -> IVec2 {
        self.cell
    }

    fn facing(&self) -> Direction {
        self.facing
    }
}

pub fn maze(rows: &[&str]) -> Maze {
    Maze::parse(rows).expect("test board should parse")
}

/// A `width` x `height` board with a wall border and an empty interior.
pub fn open_maze(width: usize, height: usize) -> Maze {
    let wall = "#".repeat(width);
    let inner = format!("#{}#", " ".repeat(width - 2));
    let rows: Vec<&str> = (0..height)
        .map(|y| if y == 0 || y == height - 1 { wall.as_str() } else { inner.as_str() })
        .collect();
    maze(&rows)
}

pub fn ghost(ghost_type: GhostType, x: i32, y: i32) -> Ghost {
    Ghost::new(ghost_type, IVec2::new(x, y), 1.0, GHOST_STEP)
}

/// A ghost spawned at `spawn` but currently standing on `cell`.
pub fn ghost_away_from_spawn(ghost_type: GhostType, spawn: IVec2, cell: IVec2) -> Ghost {
    let mut ghost = Ghost::new(ghost_type, spawn, 1.0, GHOST_STEP);
    ghost.actor.teleport(cell);
    ghost
}

pub fn ghost_ai_for(maze: &impl Occupancy) -> GhostAi {
    GhostAi::with_seed(
        ModeTimings::default(),
        ScatterCorners::for_dimensions(maze.width(), maze.height()),
        TargetingParams::default(),
        SEED,
    )
}

/// Finishes every outstanding ghost transit.
pub fn settle(ghosts: &mut [Ghost]) {
    for ghost in ghosts.iter_mut() {
        ghost.actor.advance(GHOST_STEP);
    }
}

/// A world holding every resource the simulation systems read.
pub fn create_test_world(rows: &[&str], muncher_cell: IVec2, ghosts: Vec<Ghost>) -> World {
    let maze = maze(rows);
    let mut world = World::default();
    world.insert_resource(ghost_ai_for(&maze));
    world.insert_resource(maze);
    world.insert_resource(Muncher::new(muncher_cell, 1.0, PLAYER_STEP));
    world.insert_resource(Ghosts(ghosts));
    world.insert_resource(Autopilot {
        rng: SmallRng::seed_from_u64(SEED),
    });
    world.insert_resource(DeltaTime::default());
    world.insert_resource(SimStats::default());
    world
}
