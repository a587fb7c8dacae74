//! Grid position and timed cell-to-cell transit shared by every moving actor.

use std::time::Duration;

use glam::{IVec2, Vec2};

use crate::map::direction::Direction;
use crate::map::maze::Occupancy;

/// An in-flight move between two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transit {
    pub from: IVec2,
    pub to: IVec2,
    pub elapsed: Duration,
}

/// The position model of one actor.
///
/// The discrete `cell` is authoritative for collision and targeting. The
/// render position follows it and equals `cell * tile_size` whenever no
/// transit is outstanding.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    cell: IVec2,
    render_position: Vec2,
    facing: Direction,
    transit: Option<Transit>,
    tile_size: f32,
    step_duration: Duration,
}

impl Actor {
    pub fn new(cell: IVec2, facing: Direction, tile_size: f32, step_duration: Duration) -> Self {
        Self {
            cell,
            render_position: cell.as_vec2() * tile_size,
            facing,
            transit: None,
            tile_size,
            step_duration,
        }
    }

    pub fn cell(&self) -> IVec2 {
        self.cell
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn render_position(&self) -> Vec2 {
        self.render_position
    }

    pub fn transit(&self) -> Option<&Transit> {
        self.transit.as_ref()
    }

    /// Whether a transit is outstanding. No new move may begin while this holds.
    pub fn is_moving(&self) -> bool {
        self.transit.is_some()
    }

    /// The cell one step away in `direction`, legal or not.
    pub fn neighbor(&self, direction: Direction) -> IVec2 {
        self.cell + direction.as_ivec2()
    }

    /// Whether a move in `direction` would land on a traversable, in-bounds cell.
    pub fn can_move(&self, maze: &impl Occupancy, direction: Direction) -> bool {
        maze.is_traversable(self.neighbor(direction))
    }

    /// Begins a transit toward the adjacent cell in `direction`.
    ///
    /// Returns `false` without touching any state when already moving or when the move is illegal.
    pub fn start_move(&mut self, maze: &impl Occupancy, direction: Direction) -> bool {
        if self.is_moving() || !self.can_move(maze, direction) {
            return false;
        }

        self.facing = direction;
        self.transit = Some(Transit {
            from: self.cell,
            to: self.neighbor(direction),
            elapsed: Duration::ZERO,
        });
        true
    }

    /// Progress of the current transit in `[0, 1]`, or `None` when idle.
    pub fn progress(&self) -> Option<f32> {
        self.transit.map(|transit| self.progress_of(transit.elapsed))
    }

    fn progress_of(&self, elapsed: Duration) -> f32 {
        if self.step_duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.step_duration.as_secs_f32()).min(1.0)
    }

    /// Advances the current transit by `dt`.
    ///
    /// Returns `true` on the call that completes the transit; the actor has then
    /// snapped to the destination cell.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(mut transit) = self.transit else {
            return false;
        };

        transit.elapsed += dt;
        let progress = self.progress_of(transit.elapsed);

        if progress >= 1.0 {
            self.cell = transit.to;
            self.render_position = transit.to.as_vec2() * self.tile_size;
            self.transit = None;
            return true;
        }

        let start = transit.from.as_vec2() * self.tile_size;
        let target = transit.to.as_vec2() * self.tile_size;
        self.render_position = start + (target - start) * progress;
        self.transit = Some(transit);
        false
    }

    /// Places the actor on `cell` immediately, dropping any transit.
    pub fn teleport(&mut self, cell: IVec2) {
        self.cell = cell;
        self.render_position = cell.as_vec2() * self.tile_size;
        self.transit = None;
    }
}
