//! Centralized error types for the simulation.
//!
//! The ghost decision core never fails; these errors cover the edges that
//! touch the outside world: board text, configuration and logging setup.

/// Main error type for the simulation.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Error type for map parsing operations.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Unknown character {character:?} at ({x}, {y})")]
    UnknownCharacter { character: char, x: usize, y: usize },
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("Board is empty")]
    EmptyBoard,
}

/// Errors from a board that parses but cannot host a game.
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("Expected exactly one player start, found {0}")]
    PlayerStartCount(usize),

    #[error("No ghost spawn found")]
    NoGhostSpawn,

    #[error("Invalid map configuration: {0}")]
    InvalidConfig(String),
}

/// Errors related to loading the simulation configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Extract(Box::new(error))
    }
}

/// Result type for fallible simulation setup.
pub type GameResult<T> = Result<T, GameError>;
