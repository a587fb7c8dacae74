//! This module contains the main game logic and state.

use std::time::Duration;

use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use strum::EnumCount;
use tracing::{debug, info, warn};

use crate::ai::mode::Mode;
use crate::ai::targeting::ScatterCorners;
use crate::ai::GhostAi;
use crate::config::SimConfig;
use crate::constants::RAW_BOARD;
use crate::entity::ghost::{Ghost, GhostType};
use crate::entity::muncher::Muncher;
use crate::error::{GameResult, MapError};
use crate::map::maze::{Maze, Occupancy};
use crate::systems::{self, Autopilot, DeltaTime, Ghosts, SimSet, SimStats};

/// Core simulation state.
///
/// All state lives in the bevy `World` as resources; the `Schedule` runs the
/// systems in order once per [`Game::tick`].
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Creates a game on the default board.
    pub fn new(config: &SimConfig) -> GameResult<Game> {
        Self::with_board(config, &RAW_BOARD)
    }

    /// Creates a game on a custom board.
    ///
    /// # Errors
    ///
    /// Fails when the board does not parse or lacks a muncher start or ghost spawn.
    pub fn with_board(config: &SimConfig, board: &[&str]) -> GameResult<Game> {
        let maze = Maze::new(board)?;
        let start = maze.player_start().ok_or(MapError::PlayerStartCount(0))?;

        let muncher = Muncher::new(start, config.tile_size, config.player_step());
        let ghosts = Self::spawn_ghosts(&maze, config);

        let corners = ScatterCorners::for_dimensions(maze.width(), maze.height());
        let (ai, autopilot_rng) = match config.seed {
            Some(seed) => (
                GhostAi::with_seed(config.mode_timings(), corners, config.targeting(), seed),
                SmallRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (
                GhostAi::new(config.mode_timings(), corners, config.targeting()),
                SmallRng::from_rng(&mut rand::rng()),
            ),
        };

        let mut world = World::default();
        world.insert_resource(maze);
        world.insert_resource(muncher);
        world.insert_resource(Ghosts(ghosts));
        world.insert_resource(ai);
        world.insert_resource(Autopilot { rng: autopilot_rng });
        world.insert_resource(DeltaTime::default());
        world.insert_resource(SimStats::default());

        let mut schedule = Schedule::default();
        Self::configure_schedule(&mut schedule);

        info!(start = %start, seed = ?config.seed, "Game created");
        Ok(Game { world, schedule })
    }

    /// One ghost per identity. With four or more spawn cells the ghosts take
    /// the first four in reading order; otherwise they all share the first.
    fn spawn_ghosts(maze: &Maze, config: &SimConfig) -> Vec<Ghost> {
        let spawns = maze.ghost_spawns();
        if spawns.len() < GhostType::COUNT {
            warn!(spawns = spawns.len(), "Fewer ghost spawns than ghosts, sharing the first spawn");
        }

        GhostType::ALL
            .iter()
            .enumerate()
            .map(|(i, &ghost_type)| {
                let spawn: IVec2 = if spawns.len() >= GhostType::COUNT {
                    spawns[i]
                } else {
                    spawns[0]
                };
                debug!(ghost = %ghost_type, %spawn, personality = %ghost_type.personality(), "Ghost spawned");
                Ghost::new(ghost_type, spawn, config.tile_size, config.ghost_step())
            })
            .collect()
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule
            .add_systems((
                systems::autopilot_system.in_set(SimSet::Input),
                (systems::ghost_ai_system, systems::movement_system)
                    .chain()
                    .in_set(SimSet::Update),
                (systems::item_system, systems::collision_system, systems::telemetry_system)
                    .chain()
                    .in_set(SimSet::Respond),
            ))
            .configure_sets((SimSet::Input, SimSet::Update, SimSet::Respond).chain());
    }

    /// Advances the simulation by `dt`.
    ///
    /// Returns `true` once the run is over: the muncher was caught or the board is cleared.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.world.insert_resource(DeltaTime(dt));
        self.schedule.run(&mut self.world);
        self.is_over()
    }

    pub fn is_over(&self) -> bool {
        let caught = self.world.resource::<Muncher>().is_dying();
        let cleared = self.world.resource::<Maze>().remaining_items() == 0;
        caught || cleared
    }

    pub fn stats(&self) -> &SimStats {
        self.world.resource::<SimStats>()
    }

    pub fn mode(&self) -> Mode {
        self.world.resource::<GhostAi>().current_mode()
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.world.resource::<Ghosts>().0
    }

    pub fn muncher(&self) -> &Muncher {
        self.world.resource::<Muncher>()
    }

    pub fn maze(&self) -> &Maze {
        self.world.resource::<Maze>()
    }

    pub fn ghost_ai_mut(&mut self) -> bevy_ecs::world::Mut<'_, GhostAi> {
        self.world.resource_mut::<GhostAi>()
    }
}
