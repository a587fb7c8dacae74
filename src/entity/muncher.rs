use std::time::Duration;

use bevy_ecs::resource::Resource;
use glam::IVec2;
use strum_macros::Display;
use tracing::debug;

use crate::entity::actor::Actor;
use crate::entity::PlayerView;
use crate::map::direction::Direction;
use crate::map::maze::Occupancy;

/// Visual state of the muncher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum MuncherState {
    #[default]
    Idle,
    Moving,
    Dying,
}

/// The player-controlled agent.
#[derive(Resource, Debug, Clone)]
pub struct Muncher {
    pub actor: Actor,
    state: MuncherState,
}

impl Muncher {
    pub fn new(cell: IVec2, tile_size: f32, step_duration: Duration) -> Self {
        Self {
            actor: Actor::new(cell, Direction::Right, tile_size, step_duration),
            state: MuncherState::Idle,
        }
    }

    pub fn state(&self) -> MuncherState {
        self.state
    }

    pub fn is_dying(&self) -> bool {
        self.state == MuncherState::Dying
    }

    /// Starts a move unless dying, already moving or blocked.
    pub fn start_move(&mut self, maze: &impl Occupancy, direction: Direction) -> bool {
        if self.is_dying() || !self.actor.start_move(maze, direction) {
            return false;
        }
        self.state = MuncherState::Moving;
        true
    }

    /// Advances the current transit, falling back to idle on arrival.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let arrived = self.actor.advance(dt);
        if arrived && self.state == MuncherState::Moving {
            self.state = MuncherState::Idle;
        }
        arrived
    }

    /// Marks the muncher as caught. It stops accepting moves; an outstanding transit still completes.
    pub fn kill(&mut self) {
        if !self.is_dying() {
            debug!(cell = %self.actor.cell(), "Muncher caught");
            self.state = MuncherState::Dying;
        }
    }
}

impl PlayerView for Muncher {
    fn cell(&self) -> IVec2 {
        self.actor.cell()
    }

    fn facing(&self) -> Direction {
        self.actor.facing()
    }
}
