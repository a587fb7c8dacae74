use bevy_ecs::system::ResMut;
use tracing::info;

use crate::entity::ghost::GhostState;
use crate::entity::muncher::Muncher;
use crate::entity::PlayerView;
use crate::systems::components::{Ghosts, SimStats};

/// Resolves muncher and ghost sharing a cell.
///
/// A Frightened ghost is eaten and heads home. A Normal ghost catches the
/// muncher. Returning ghosts pass through harmlessly.
pub fn collision_system(mut muncher: ResMut<Muncher>, mut ghosts: ResMut<Ghosts>, mut stats: ResMut<SimStats>) {
    if muncher.is_dying() {
        return;
    }

    let cell = muncher.cell();
    for ghost in ghosts.0.iter_mut().filter(|ghost| ghost.cell() == cell) {
        match ghost.state() {
            GhostState::Frightened => {
                if ghost.notify_captured() {
                    stats.ghosts_captured += 1;
                    info!(ghost = %ghost.ghost_type(), %cell, "Ghost eaten");
                }
            }
            GhostState::Normal => {
                info!(ghost = %ghost.ghost_type(), %cell, "Muncher caught");
                muncher.kill();
                stats.muncher_caught = true;
                return;
            }
            GhostState::Returning => {}
        }
    }
}
