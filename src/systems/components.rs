use std::time::Duration;

use bevy_ecs::resource::Resource;
use rand::rngs::SmallRng;

use crate::entity::ghost::Ghost;

/// Simulated time elapsed since the previous tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeltaTime(pub Duration);

/// Every ghost in update order. The order is stable for the whole session.
#[derive(Resource, Debug, Clone, Default)]
pub struct Ghosts(pub Vec<Ghost>);

/// Random source for the headless muncher driver.
#[derive(Resource, Debug)]
pub struct Autopilot {
    pub rng: SmallRng,
}

/// Counters for the end-of-run summary.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct SimStats {
    pub ticks: u64,
    pub pellets_eaten: u32,
    pub power_pellets_eaten: u32,
    pub ghosts_captured: u32,
    pub mode_changes: u32,
    pub muncher_caught: bool,
}
