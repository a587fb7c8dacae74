use bevy_ecs::system::{Res, ResMut};
use tracing::{debug, trace};

use crate::ai::GhostAi;
use crate::entity::muncher::Muncher;
use crate::entity::PlayerView;
use crate::map::maze::{Item, Maze};
use crate::systems::components::{Ghosts, SimStats};

/// Eats whatever item lies under the muncher.
///
/// A power pellet frightens the ghosts in the same tick through [`GhostAi::notify_power_item_consumed`].
pub fn item_system(
    mut maze: ResMut<Maze>,
    muncher: Res<Muncher>,
    mut ai: ResMut<GhostAi>,
    mut ghosts: ResMut<Ghosts>,
    mut stats: ResMut<SimStats>,
) {
    let cell = muncher.cell();
    match maze.consume_item(cell) {
        Some(Item::Pellet) => {
            stats.pellets_eaten += 1;
            trace!(%cell, remaining = maze.remaining_items(), "Pellet eaten");
        }
        Some(Item::PowerPellet) => {
            stats.power_pellets_eaten += 1;
            debug!(%cell, remaining = maze.remaining_items(), "Power pellet eaten");
            ai.notify_power_item_consumed(&mut ghosts.0);
        }
        None => {}
    }
}
