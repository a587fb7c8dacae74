//! Ghost decision making: the shared mode cycle, personality targeting and
//! steering toward a target tile.

pub mod controller;
pub mod mode;
pub mod steering;
pub mod targeting;

pub use controller::GhostAi;
pub use mode::{Mode, ModeController, ModeTimings, ModeTransition};
