use bevy_ecs::system::{Res, ResMut};

use crate::ai::GhostAi;
use crate::entity::muncher::Muncher;
use crate::map::maze::Maze;
use crate::systems::components::{DeltaTime, Ghosts};

/// Runs the shared ghost decision loop once per tick.
pub fn ghost_ai_system(
    mut ai: ResMut<GhostAi>,
    mut ghosts: ResMut<Ghosts>,
    muncher: Res<Muncher>,
    maze: Res<Maze>,
    delta_time: Res<DeltaTime>,
) {
    ai.update(&mut ghosts.0, muncher.as_ref(), maze.as_ref(), delta_time.0);
}
