//! The per-tick systems of the headless simulation.
//!
//! Systems run in a fixed order: input, ghost decisions, movement, then the
//! consequences of where everyone ended up.

use bevy_ecs::schedule::SystemSet;

pub mod collision;
pub mod components;
pub mod ghost;
pub mod item;
pub mod movement;
pub mod player;
pub mod telemetry;

pub use self::collision::collision_system;
pub use self::components::*;
pub use self::ghost::ghost_ai_system;
pub use self::item::item_system;
pub use self::movement::movement_system;
pub use self::player::autopilot_system;
pub use self::telemetry::telemetry_system;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Muncher steering.
    Input,
    /// Ghost decisions and transit.
    Update,
    /// Items, collisions and reporting.
    Respond,
}
