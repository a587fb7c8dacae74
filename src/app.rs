use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::SimConfig;
use crate::error::GameResult;
use crate::formatter;
use crate::game::Game;

/// Drives a [`Game`] at a fixed rate until it ends or hits the tick limit.
pub struct App {
    pub game: Game,
    loop_time: Duration,
    realtime: bool,
    max_ticks: Option<u64>,
    ticks: u64,
    last_tick: Instant,
}

impl App {
    /// # Errors
    ///
    /// Propagates errors from [`Game::new`].
    pub fn new(config: &SimConfig) -> GameResult<Self> {
        let game = Game::new(config)?;
        info!(fps = config.fps, realtime = config.realtime, max_ticks = ?config.max_ticks, "Simulation ready");

        Ok(App {
            game,
            loop_time: config.loop_time(),
            realtime: config.realtime,
            max_ticks: config.max_ticks,
            ticks: 0,
            last_tick: Instant::now(),
        })
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Executes a single tick, sleeping off whatever remains of the frame budget.
    ///
    /// Realtime runs advance the game by the measured wall-clock delta; otherwise
    /// every tick advances it by exactly one frame.
    ///
    /// # Returns
    ///
    /// `true` if the loop should continue, `false` once the game is over or the tick limit is reached.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        let dt = if self.realtime {
            start.duration_since(self.last_tick)
        } else {
            self.loop_time
        };
        self.last_tick = start;

        formatter::increment_tick();
        let over = self.game.tick(dt);
        self.ticks += 1;

        if over || self.max_ticks.is_some_and(|max| self.ticks >= max) {
            return false;
        }

        if self.realtime {
            let elapsed = start.elapsed();
            if elapsed < self.loop_time {
                spin_sleep::sleep(self.loop_time - elapsed);
            } else {
                warn!(
                    elapsed = format!("{elapsed:.2?}"),
                    budget = format!("{:.2?}", self.loop_time),
                    "Tick ran behind schedule"
                );
            }
        }

        true
    }

    /// Logs the end-of-run summary.
    pub fn report(&self) {
        let stats = self.game.stats();
        info!(
            ticks = self.ticks,
            pellets = stats.pellets_eaten,
            power_pellets = stats.power_pellets_eaten,
            ghosts_eaten = stats.ghosts_captured,
            mode_changes = stats.mode_changes,
            caught = stats.muncher_caught,
            remaining = self.game.maze().remaining_items(),
            mode = %self.game.mode(),
            "Simulation finished"
        );
    }
}
