//! The shared Scatter / Chase / Frightened cycle.

use std::time::Duration;

use strum_macros::{AsRefStr, Display};

use crate::constants::mode::{CHASE_SECS, FRIGHTENED_SECS, SCATTER_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Mode {
    #[default]
    Scatter,
    Chase,
    Frightened,
}

/// How long each mode lasts before the timer moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTimings {
    pub scatter: Duration,
    pub chase: Duration,
    pub frightened: Duration,
}

impl ModeTimings {
    pub fn dwell(&self, mode: Mode) -> Duration {
        match mode {
            Mode::Scatter => self.scatter,
            Mode::Chase => self.chase,
            Mode::Frightened => self.frightened,
        }
    }
}

impl Default for ModeTimings {
    fn default() -> Self {
        Self {
            scatter: Duration::from_secs_f32(SCATTER_SECS),
            chase: Duration::from_secs_f32(CHASE_SECS),
            frightened: Duration::from_secs_f32(FRIGHTENED_SECS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: Mode,
    pub to: Mode,
}

impl ModeTransition {
    pub fn entered_frightened(&self) -> bool {
        self.to == Mode::Frightened
    }

    pub fn left_frightened(&self) -> bool {
        self.from == Mode::Frightened && self.to != Mode::Frightened
    }
}

/// Mode plus the time spent in it.
///
/// `elapsed` restarts from zero on every transition, including a repeated
/// Frightened trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeController {
    mode: Mode,
    elapsed: Duration,
    timings: ModeTimings,
}

impl ModeController {
    pub fn new(timings: ModeTimings) -> Self {
        Self {
            mode: Mode::Scatter,
            elapsed: Duration::ZERO,
            timings,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn timings(&self) -> &ModeTimings {
        &self.timings
    }

    /// Time left before the current mode expires.
    pub fn remaining(&self) -> Duration {
        self.timings.dwell(self.mode).saturating_sub(self.elapsed)
    }

    /// Advances the timer, performing at most one transition.
    ///
    /// Time beyond the expiry is dropped, so the next mode starts from zero.
    pub fn tick(&mut self, dt: Duration) -> Option<ModeTransition> {
        self.elapsed += dt;
        if self.elapsed < self.timings.dwell(self.mode) {
            return None;
        }

        let next = match self.mode {
            Mode::Scatter => Mode::Chase,
            Mode::Chase => Mode::Scatter,
            Mode::Frightened => Mode::Chase,
        };
        Some(self.enter(next))
    }

    /// Switches to Frightened immediately, abandoning the current timer.
    pub fn frighten(&mut self) -> ModeTransition {
        self.enter(Mode::Frightened)
    }

    fn enter(&mut self, mode: Mode) -> ModeTransition {
        let transition = ModeTransition { from: self.mode, to: mode };
        self.mode = mode;
        self.elapsed = Duration::ZERO;
        transition
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(ModeTimings::default())
    }
}
