//! Munch Maze simulation library crate.
//!
//! Ghost decision making lives in [`ai`]; [`game`] wires it into a headless
//! bevy schedule together with the muncher, the maze and its items.

pub mod ai;
pub mod app;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod game;
pub mod logging;
pub mod map;
pub mod systems;
