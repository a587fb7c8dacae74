use std::time::Duration;

use bevy_ecs::resource::Resource;
use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::ai::mode::{Mode, ModeController, ModeTimings, ModeTransition};
use crate::ai::steering::{best_direction, random_direction};
use crate::ai::targeting::{chase_target, ChaseContext, ScatterCorners, TargetingParams};
use crate::entity::ghost::{Ghost, Personality};
use crate::entity::PlayerView;
use crate::map::maze::Occupancy;

/// The decision loop shared by all ghosts.
///
/// Owns the global mode, the scatter corners and the random source used while
/// Frightened. Ghosts are updated in slice order.
#[derive(Resource, Debug)]
pub struct GhostAi {
    mode: ModeController,
    corners: ScatterCorners,
    params: TargetingParams,
    rng: SmallRng,
}

impl GhostAi {
    pub fn new(timings: ModeTimings, corners: ScatterCorners, params: TargetingParams) -> Self {
        Self::with_rng(timings, corners, params, SmallRng::from_rng(&mut rand::rng()))
    }

    /// Deterministic Frightened wandering for a given seed.
    pub fn with_seed(timings: ModeTimings, corners: ScatterCorners, params: TargetingParams, seed: u64) -> Self {
        Self::with_rng(timings, corners, params, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(timings: ModeTimings, corners: ScatterCorners, params: TargetingParams, rng: SmallRng) -> Self {
        Self {
            mode: ModeController::new(timings),
            corners,
            params,
            rng,
        }
    }

    pub fn current_mode(&self) -> Mode {
        self.mode.mode()
    }

    /// Switches the global mode and every non-returning ghost to Frightened.
    ///
    /// Calling this again while Frightened restarts the timer.
    pub fn notify_power_item_consumed(&mut self, ghosts: &mut [Ghost]) -> ModeTransition {
        let transition = self.mode.frighten();
        let mut frightened = 0;
        for ghost in ghosts.iter_mut() {
            if ghost.frighten() {
                frightened += 1;
            }
        }
        debug!(from = %transition.from, frightened, "Power item consumed");
        transition
    }

    /// Where a non-returning ghost is heading under the current mode.
    ///
    /// `None` while Frightened; movement is random then.
    pub fn target_tile(&self, ghost: &Ghost, player: &impl PlayerView, chaser_cell: Option<IVec2>) -> Option<IVec2> {
        match self.mode.mode() {
            Mode::Scatter => Some(self.corners.corner(ghost.personality())),
            Mode::Chase => {
                let context = ChaseContext::new(ghost.cell(), player, chaser_cell);
                Some(chase_target(ghost.personality(), &context, &self.corners, &self.params))
            }
            Mode::Frightened => None,
        }
    }

    /// Runs one decision tick.
    ///
    /// Advances the mode timer, then starts a move for every ghost that is
    /// idle. Returns the timed mode transition of this call, if any.
    pub fn update(
        &mut self,
        ghosts: &mut [Ghost],
        player: &impl PlayerView,
        maze: &impl Occupancy,
        dt: Duration,
    ) -> Option<ModeTransition> {
        let transition = self.mode.tick(dt);
        if transition.is_some_and(|timed| timed.left_frightened()) {
            for ghost in ghosts.iter_mut() {
                ghost.calm();
            }
        }

        let chaser_cell = ghosts
            .iter()
            .find(|ghost| ghost.personality() == Personality::Chaser)
            .map(Ghost::cell);

        for ghost in ghosts.iter_mut() {
            if ghost.is_returning() {
                ghost.return_home(maze);
                continue;
            }
            if ghost.actor.is_moving() {
                continue;
            }

            let direction = match self.target_tile(ghost, player, chaser_cell) {
                Some(target) => {
                    let direction = best_direction(&ghost.actor, maze, target);
                    trace!(ghost = %ghost.ghost_type(), %target, ?direction, "Ghost targeting");
                    direction
                }
                None => random_direction(&ghost.actor, maze, &mut self.rng),
            };

            match direction {
                Some(direction) => {
                    ghost.actor.start_move(maze, direction);
                }
                None => trace!(ghost = %ghost.ghost_type(), cell = %ghost.cell(), "Ghost has no legal move"),
            }
        }

        transition
    }
}

impl Default for GhostAi {
    fn default() -> Self {
        Self::new(
            ModeTimings::default(),
            ScatterCorners::for_dimensions(
                crate::constants::BOARD_CELL_SIZE.x,
                crate::constants::BOARD_CELL_SIZE.y,
            ),
            TargetingParams::default(),
        )
    }
}
