//! This module contains all the constants used in the simulation.

use std::time::Duration;

use glam::UVec2;

/// Target simulation rate, one tick per rendered frame.
pub const TARGET_FPS: u32 = 60;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / TARGET_FPS as f64) as u64);

/// The size of each cell, in render units.
pub const CELL_SIZE: u32 = 32;
/// The size of the default game board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(28, 31);

/// Ghost mode dwell times, in seconds.
pub mod mode {
    pub const SCATTER_SECS: f32 = 7.0;
    pub const CHASE_SECS: f32 = 20.0;
    pub const FRIGHTENED_SECS: f32 = 10.0;
}

/// Targeting parameters shared by the ghost personalities.
pub mod targeting {
    /// Tiles ahead of the muncher the Ambusher aims for.
    pub const AMBUSH_DISTANCE: i32 = 4;
    /// Tiles ahead of the muncher used as the Fickle ghost's pivot.
    pub const FICKLE_PIVOT_DISTANCE: i32 = 2;
    /// Below this Euclidean distance (in tiles) the Bashful ghost retreats.
    pub const BASHFUL_RETREAT_DISTANCE: f32 = 8.0;
}

/// Time to cross one cell, in seconds.
pub mod speed {
    pub const PLAYER_STEP_SECS: f32 = 0.3;
    pub const GHOST_STEP_SECS: f32 = 0.4;
}

/// The raw layout of the default board.
///
/// `#` wall, `.` pellet, `o` power pellet, ` ` empty, `X` muncher start, `G` ghost spawn.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "     #.##### ## #####.#     ",
    "     #.##  G    G  ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#     .   ########   .     #",
    "######.## ######## ##.######",
    "     #.## ######## ##.#     ",
    "     #.##  G    G  ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......X .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];
