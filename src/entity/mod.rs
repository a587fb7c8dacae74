//! Actors that move through the maze: the muncher and the ghosts.

use glam::IVec2;

use crate::map::direction::Direction;

pub mod actor;
pub mod ghost;
pub mod muncher;

/// What the ghosts are allowed to know about the player agent.
pub trait PlayerView {
    /// The player's current discrete cell.
    fn cell(&self) -> IVec2;
    /// The direction the player last moved in.
    fn facing(&self) -> Direction;
}
