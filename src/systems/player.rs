use bevy_ecs::system::{Res, ResMut};
use tracing::trace;

use crate::ai::steering::random_direction;
use crate::entity::muncher::Muncher;
use crate::map::maze::Maze;
use crate::systems::components::Autopilot;

/// Drives the muncher without a keyboard.
///
/// Keeps going straight while it can. Once blocked it picks a random legal
/// direction, reversing only when nothing else is open.
pub fn autopilot_system(maze: Res<Maze>, mut muncher: ResMut<Muncher>, mut autopilot: ResMut<Autopilot>) {
    if muncher.is_dying() || muncher.actor.is_moving() {
        return;
    }

    let facing = muncher.actor.facing();
    let direction = if muncher.actor.can_move(maze.as_ref(), facing) {
        Some(facing)
    } else {
        random_direction(&muncher.actor, maze.as_ref(), &mut autopilot.rng)
    };

    if let Some(direction) = direction {
        trace!(?direction, cell = %muncher.actor.cell(), "Autopilot move");
        muncher.start_move(maze.as_ref(), direction);
    }
}
