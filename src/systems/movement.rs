use bevy_ecs::system::{Res, ResMut};

use crate::entity::muncher::Muncher;
use crate::systems::components::{DeltaTime, Ghosts};

/// Advances every outstanding transit by the tick's delta time.
pub fn movement_system(delta_time: Res<DeltaTime>, mut muncher: ResMut<Muncher>, mut ghosts: ResMut<Ghosts>) {
    muncher.advance(delta_time.0);
    for ghost in ghosts.0.iter_mut() {
        ghost.actor.advance(delta_time.0);
    }
}
