//! The static maze and the traversability queries every actor depends on.

use bevy_ecs::resource::Resource;
use bitflags::bitflags;
use glam::IVec2;
use tracing::debug;

use crate::error::{GameResult, MapError, ParseError};
use crate::map::parser::MapTileParser;

bitflags! {
    /// Everything a single maze cell can hold.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        const WALL = 1 << 0;
        const PELLET = 1 << 1;
        const POWER_PELLET = 1 << 2;
        const GHOST_SPAWN = 1 << 3;
        const PLAYER_START = 1 << 4;
    }
}

/// A collectable item removed from the maze by the muncher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Pellet,
    PowerPellet,
}

/// Answers "can an actor stand on this cell".
///
/// Cells outside `0..width` x `0..height` are never traversable.
pub trait Occupancy {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn is_traversable(&self, cell: IVec2) -> bool;

    fn in_bounds(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width() && (cell.y as u32) < self.height()
    }
}

/// The game board: a static wall layout plus the item layer the muncher eats through.
#[derive(Resource, Debug, Clone)]
pub struct Maze {
    width: u32,
    height: u32,
    cells: Vec<CellFlags>,
    player_start: Option<IVec2>,
    ghost_spawns: Vec<IVec2>,
    remaining_items: usize,
}

impl Maze {
    /// Parses a board without checking for start markers.
    ///
    /// Useful for small scenario boards; [`Maze::new`] is the validated entry point.
    pub fn parse(raw_board: &[&str]) -> Result<Maze, ParseError> {
        let parsed = MapTileParser::parse_board(raw_board)?;
        let remaining_items = parsed
            .cells
            .iter()
            .filter(|flags| flags.intersects(CellFlags::PELLET | CellFlags::POWER_PELLET))
            .count();

        Ok(Maze {
            width: parsed.width,
            height: parsed.height,
            cells: parsed.cells,
            player_start: parsed.player_starts.first().copied(),
            ghost_spawns: parsed.ghost_spawns,
            remaining_items,
        })
    }

    /// Parses and validates a playable board.
    ///
    /// # Errors
    ///
    /// Fails on parse errors, when the number of muncher starts is not exactly one,
    /// or when there is no ghost spawn.
    pub fn new(raw_board: &[&str]) -> GameResult<Maze> {
        let starts = raw_board
            .iter()
            .map(|row| row.chars().filter(|c| *c == 'X').count())
            .sum::<usize>();
        let maze = Self::parse(raw_board)?;

        if starts != 1 {
            return Err(MapError::PlayerStartCount(starts).into());
        }
        if maze.ghost_spawns.is_empty() {
            return Err(MapError::NoGhostSpawn.into());
        }
        if let Some(wall) = maze.ghost_spawns.iter().find(|spawn| !maze.is_traversable(**spawn)) {
            return Err(MapError::InvalidConfig(format!("ghost spawn {wall} is inside a wall")).into());
        }

        debug!(
            width = maze.width,
            height = maze.height,
            items = maze.remaining_items,
            spawns = maze.ghost_spawns.len(),
            "Maze loaded"
        );
        Ok(maze)
    }

    fn index(&self, cell: IVec2) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Returns the flags of a cell, or `None` when out of bounds.
    pub fn cell(&self, cell: IVec2) -> Option<CellFlags> {
        self.index(cell).map(|i| self.cells[i])
    }

    pub fn is_wall(&self, cell: IVec2) -> bool {
        self.cell(cell).is_none_or(|flags| flags.contains(CellFlags::WALL))
    }

    pub fn player_start(&self) -> Option<IVec2> {
        self.player_start
    }

    /// Ghost spawn cells in reading order.
    pub fn ghost_spawns(&self) -> &[IVec2] {
        &self.ghost_spawns
    }

    /// Pellets and power pellets still on the board.
    pub fn remaining_items(&self) -> usize {
        self.remaining_items
    }

    /// Removes and returns the item on `cell`, if any.
    pub fn consume_item(&mut self, cell: IVec2) -> Option<Item> {
        let index = self.index(cell)?;
        let flags = &mut self.cells[index];

        let item = if flags.contains(CellFlags::POWER_PELLET) {
            flags.remove(CellFlags::POWER_PELLET);
            Item::PowerPellet
        } else if flags.contains(CellFlags::PELLET) {
            flags.remove(CellFlags::PELLET);
            Item::Pellet
        } else {
            return None;
        };

        self.remaining_items -= 1;
        Some(item)
    }
}

impl Occupancy for Maze {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_traversable(&self, cell: IVec2) -> bool {
        !self.is_wall(cell)
    }
}
