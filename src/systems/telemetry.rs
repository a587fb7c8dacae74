use bevy_ecs::system::{Local, Res, ResMut};
use tracing::info;

use crate::ai::{GhostAi, Mode};
use crate::systems::components::SimStats;

/// Reports global mode changes and counts ticks.
pub fn telemetry_system(ai: Res<GhostAi>, mut stats: ResMut<SimStats>, mut last_mode: Local<Option<Mode>>) {
    let mode = ai.current_mode();
    match *last_mode {
        Some(previous) if previous != mode => {
            info!(from = %previous, to = %mode, "Ghost mode changed");
            stats.mode_changes += 1;
        }
        Some(_) => {}
        None => info!(%mode, "Ghost mode initialized"),
    }
    *last_mode = Some(mode);
    stats.ticks += 1;
}
