use std::time::Duration;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::ai::mode::ModeTimings;
use crate::ai::targeting::TargetingParams;
use crate::constants::{self, mode, speed, targeting};
use crate::error::ConfigError;

/// Prefix for environment overrides, e.g. `MUNCH_SCATTER_SECS=5`.
pub const ENV_PREFIX: &str = "MUNCH_";

/// Tunables for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seconds spent in Scatter before switching to Chase
    pub scatter_secs: f32,
    /// Seconds spent in Chase before switching back to Scatter
    pub chase_secs: f32,
    /// Seconds a power pellet keeps the ghosts Frightened
    pub frightened_secs: f32,
    pub player_step_secs: f32,
    pub ghost_step_secs: f32,
    /// Render units per cell
    pub tile_size: f32,
    pub ambush_distance: i32,
    pub bashful_retreat_distance: f32,
    /// Keep the diagonal ambush offset when the muncher faces up
    pub ambusher_up_quirk: bool,
    pub fps: u32,
    /// Stop after this many ticks; runs until game over when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks: Option<u64>,
    /// Seed for ghost and autopilot randomness; fresh entropy when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Sleep between ticks to hold `fps`; when false, ticks run back to back with a fixed step
    pub realtime: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            scatter_secs: mode::SCATTER_SECS,
            chase_secs: mode::CHASE_SECS,
            frightened_secs: mode::FRIGHTENED_SECS,
            player_step_secs: speed::PLAYER_STEP_SECS,
            ghost_step_secs: speed::GHOST_STEP_SECS,
            tile_size: constants::CELL_SIZE as f32,
            ambush_distance: targeting::AMBUSH_DISTANCE,
            bashful_retreat_distance: targeting::BASHFUL_RETREAT_DISTANCE,
            ambusher_up_quirk: true,
            fps: constants::TARGET_FPS,
            max_ticks: None,
            seed: None,
            realtime: true,
        }
    }
}

impl SimConfig {
    /// Defaults overridden by `MUNCH_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(SimConfig::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<SimConfig, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Extracts and validates a config from any figment.
    pub fn from_figment(figment: Figment) -> Result<SimConfig, ConfigError> {
        let config: SimConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("scatter_secs", self.scatter_secs),
            ("chase_secs", self.chase_secs),
            ("frightened_secs", self.frightened_secs),
            ("player_step_secs", self.player_step_secs),
            ("ghost_step_secs", self.ghost_step_secs),
        ];
        for (field, value) in durations {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number of seconds, got {value}"),
                });
            }
            if let Err(err) = Duration::try_from_secs_f32(value) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} seconds is out of range: {err}"),
                });
            }
        }

        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "tile_size",
                reason: format!("must be positive, got {}", self.tile_size),
            });
        }
        if !self.bashful_retreat_distance.is_finite() || self.bashful_retreat_distance < 0.0 {
            return Err(ConfigError::Invalid {
                field: "bashful_retreat_distance",
                reason: format!("must be non-negative, got {}", self.bashful_retreat_distance),
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::Invalid {
                field: "fps",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn mode_timings(&self) -> ModeTimings {
        ModeTimings {
            scatter: Duration::from_secs_f32(self.scatter_secs),
            chase: Duration::from_secs_f32(self.chase_secs),
            frightened: Duration::from_secs_f32(self.frightened_secs),
        }
    }

    pub fn targeting(&self) -> TargetingParams {
        TargetingParams {
            ambush_distance: self.ambush_distance,
            bashful_retreat_distance: self.bashful_retreat_distance,
            ambusher_up_quirk: self.ambusher_up_quirk,
            ..TargetingParams::default()
        }
    }

    pub fn player_step(&self) -> Duration {
        Duration::from_secs_f32(self.player_step_secs)
    }

    pub fn ghost_step(&self) -> Duration {
        Duration::from_secs_f32(self.ghost_step_secs)
    }

    /// Wall-clock budget of a single tick.
    pub fn loop_time(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.fps as u64)
    }
}
