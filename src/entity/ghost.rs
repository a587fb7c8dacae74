//! Ghost entity: identity, personality and the per-ghost state machine.
//!
//! A ghost is `Normal` until the shared mode frightens it, `Frightened` until
//! the mode expires or it gets eaten, and `Returning` from being eaten until it
//! walks back onto its spawn cell.

use std::time::Duration;

use glam::IVec2;
use strum_macros::{AsRefStr, Display, EnumCount};
use tracing::{debug, trace};

use crate::ai::steering::homeward_directions;
use crate::entity::actor::Actor;
use crate::map::direction::Direction;
use crate::map::maze::Occupancy;

/// The four ghost identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum GhostType {
    Jack,
    Mike,
    Sam,
    Will,
}

impl GhostType {
    /// All identities in spawn order.
    pub const ALL: [GhostType; 4] = [GhostType::Jack, GhostType::Mike, GhostType::Sam, GhostType::Will];

    /// The fixed targeting personality of this identity.
    pub const fn personality(self) -> Personality {
        match self {
            GhostType::Jack => Personality::Chaser,
            GhostType::Mike => Personality::Ambusher,
            GhostType::Sam => Personality::Fickle,
            GhostType::Will => Personality::Bashful,
        }
    }
}

/// Targeting strategy used while the shared mode is Chase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
pub enum Personality {
    /// Aims straight at the muncher.
    Chaser,
    /// Aims a few tiles ahead of the muncher.
    Ambusher,
    /// Mirrors the Chaser around a point ahead of the muncher.
    Fickle,
    /// Chases from afar, retreats when close.
    Bashful,
}

impl Personality {
    /// Index into per-personality tables. Constant time.
    pub const fn as_usize(self) -> usize {
        match self {
            Personality::Chaser => 0,
            Personality::Ambusher => 1,
            Personality::Fickle => 2,
            Personality::Bashful => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum GhostState {
    #[default]
    Normal,
    Frightened,
    Returning,
}

/// What a returning ghost did during one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnProgress {
    /// Still crossing a cell; nothing to decide.
    InTransit,
    /// Started a step toward the spawn.
    Stepped(Direction),
    /// Every homeward step is walled off.
    Blocked,
    /// Standing on the spawn cell; the ghost is Normal again.
    Arrived,
}

#[derive(Debug, Clone)]
pub struct Ghost {
    pub actor: Actor,
    ghost_type: GhostType,
    state: GhostState,
    spawn: IVec2,
}

impl Ghost {
    pub fn new(ghost_type: GhostType, spawn: IVec2, tile_size: f32, step_duration: Duration) -> Self {
        Self {
            actor: Actor::new(spawn, Direction::Right, tile_size, step_duration),
            ghost_type,
            state: GhostState::Normal,
            spawn,
        }
    }

    pub fn ghost_type(&self) -> GhostType {
        self.ghost_type
    }

    pub fn personality(&self) -> Personality {
        self.ghost_type.personality()
    }

    pub fn state(&self) -> GhostState {
        self.state
    }

    pub fn spawn(&self) -> IVec2 {
        self.spawn
    }

    pub fn cell(&self) -> IVec2 {
        self.actor.cell()
    }

    pub fn is_returning(&self) -> bool {
        self.state == GhostState::Returning
    }

    fn set_state(&mut self, new_state: GhostState) -> bool {
        if self.state == new_state {
            return false;
        }
        debug!(ghost = %self.ghost_type, old_state = %self.state, new_state = %new_state, "Ghost state changed");
        self.state = new_state;
        true
    }

    /// Reaction to the shared mode turning Frightened. Returning ghosts are unaffected.
    pub fn frighten(&mut self) -> bool {
        match self.state {
            GhostState::Normal => self.set_state(GhostState::Frightened),
            GhostState::Frightened | GhostState::Returning => false,
        }
    }

    /// Reaction to the shared Frightened mode expiring. Only Frightened ghosts calm down.
    pub fn calm(&mut self) -> bool {
        match self.state {
            GhostState::Frightened => self.set_state(GhostState::Normal),
            GhostState::Normal | GhostState::Returning => false,
        }
    }

    /// Marks this ghost as eaten; it heads home and ignores targeting until it gets there.
    ///
    /// Returns `false` if it was already returning. An outstanding transit still
    /// completes before the first homeward step.
    pub fn notify_captured(&mut self) -> bool {
        self.set_state(GhostState::Returning)
    }

    /// One decision of the homeward walk.
    ///
    /// Steps along X until aligned with the spawn, then along Y; if the preferred
    /// axis is walled off the other differing axis is tried.
    pub fn return_home(&mut self, maze: &impl Occupancy) -> ReturnProgress {
        if self.actor.is_moving() {
            return ReturnProgress::InTransit;
        }

        if self.actor.cell() == self.spawn {
            self.set_state(GhostState::Normal);
            return ReturnProgress::Arrived;
        }

        for direction in homeward_directions(self.actor.cell(), self.spawn) {
            if self.actor.start_move(maze, direction) {
                trace!(ghost = %self.ghost_type, ?direction, cell = %self.actor.cell(), "Returning ghost stepped");
                return ReturnProgress::Stepped(direction);
            }
        }

        trace!(ghost = %self.ghost_type, cell = %self.actor.cell(), "Returning ghost blocked");
        ReturnProgress::Blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ghost() -> Ghost {
        Ghost::new(GhostType::Jack, IVec2::new(1, 1), 1.0, Duration::from_millis(400))
    }

    #[test]
    fn test_personality_mapping_is_one_to_one() {
        let personalities: Vec<_> = GhostType::ALL.iter().map(|g| g.personality()).collect();
        assert_eq!(
            personalities,
            vec![
                Personality::Chaser,
                Personality::Ambusher,
                Personality::Fickle,
                Personality::Bashful
            ]
        );
    }

    #[test]
    fn test_returning_ignores_frighten() {
        let mut ghost = ghost();
        assert!(ghost.notify_captured());
        assert!(!ghost.frighten());
        assert!(!ghost.calm());
        assert_eq!(ghost.state(), GhostState::Returning);
    }

    #[test]
    fn test_capture_is_idempotent() {
        let mut ghost = ghost();
        assert!(ghost.notify_captured());
        assert!(!ghost.notify_captured());
    }

    #[test]
    fn test_calm_only_affects_frightened() {
        let mut ghost = ghost();
        assert!(!ghost.calm());
        assert!(ghost.frighten());
        assert!(ghost.calm());
        assert_eq!(ghost.state(), GhostState::Normal);
    }
}
