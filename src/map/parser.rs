//! Map parsing functionality for converting raw board layouts into structured data.

use glam::IVec2;

use crate::error::ParseError;
use crate::map::maze::CellFlags;

/// Represents the parsed data from a raw board layout.
#[derive(Debug)]
pub struct ParsedMap {
    pub width: u32,
    pub height: u32,
    /// Row-major cell flags, `width * height` entries.
    pub cells: Vec<CellFlags>,
    /// Every `X` found, in reading order.
    pub player_starts: Vec<IVec2>,
    /// Every `G` found, in reading order.
    pub ghost_spawns: Vec<IVec2>,
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into its cell flags.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownCharacter`] (positioned at the origin) for
    /// characters outside the board alphabet; [`MapTileParser::parse_board`]
    /// re-positions it.
    pub fn parse_character(c: char) -> Result<CellFlags, ParseError> {
        match c {
            '#' => Ok(CellFlags::WALL),
            '.' => Ok(CellFlags::PELLET),
            'o' => Ok(CellFlags::POWER_PELLET),
            ' ' => Ok(CellFlags::empty()),
            'X' => Ok(CellFlags::PLAYER_START),
            'G' => Ok(CellFlags::GHOST_SPAWN),
            _ => Err(ParseError::UnknownCharacter { character: c, x: 0, y: 0 }),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// Every row must have the same length as the first one.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty, rows differ in length, or a row
    /// contains an unknown character.
    pub fn parse_board(raw_board: &[&str]) -> Result<ParsedMap, ParseError> {
        let width = raw_board.first().map(|row| row.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let mut cells = Vec::with_capacity(width * raw_board.len());
        let mut player_starts = Vec::new();
        let mut ghost_spawns = Vec::new();

        for (y, line) in raw_board.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, character) in line.chars().enumerate() {
                let flags = Self::parse_character(character)
                    .map_err(|_| ParseError::UnknownCharacter { character, x, y })?;
                let position = IVec2::new(x as i32, y as i32);

                if flags.contains(CellFlags::PLAYER_START) {
                    player_starts.push(position);
                }
                if flags.contains(CellFlags::GHOST_SPAWN) {
                    ghost_spawns.push(position);
                }

                cells.push(flags);
            }
        }

        Ok(ParsedMap {
            width: width as u32,
            height: raw_board.len() as u32,
            cells,
            player_starts,
            ghost_spawns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BOARD_CELL_SIZE, RAW_BOARD};

    #[test]
    fn test_parse_character() {
        assert_eq!(MapTileParser::parse_character('#').unwrap(), CellFlags::WALL);
        assert_eq!(MapTileParser::parse_character('.').unwrap(), CellFlags::PELLET);
        assert_eq!(MapTileParser::parse_character('o').unwrap(), CellFlags::POWER_PELLET);
        assert_eq!(MapTileParser::parse_character(' ').unwrap(), CellFlags::empty());
        assert_eq!(MapTileParser::parse_character('X').unwrap(), CellFlags::PLAYER_START);
        assert_eq!(MapTileParser::parse_character('G').unwrap(), CellFlags::GHOST_SPAWN);

        assert!(MapTileParser::parse_character('Z').is_err());
    }

    #[test]
    fn test_parse_board() {
        let parsed = MapTileParser::parse_board(&RAW_BOARD).unwrap();

        assert_eq!(parsed.width, BOARD_CELL_SIZE.x);
        assert_eq!(parsed.height, BOARD_CELL_SIZE.y);
        assert_eq!(parsed.cells.len(), (BOARD_CELL_SIZE.x * BOARD_CELL_SIZE.y) as usize);
        assert_eq!(parsed.player_starts, vec![IVec2::new(13, 23)]);
        assert_eq!(parsed.ghost_spawns.len(), 4);
        assert_eq!(parsed.ghost_spawns[0], IVec2::new(11, 11));
    }

    #[test]
    fn test_parse_board_invalid_character_reports_position() {
        let mut invalid_board = RAW_BOARD;
        invalid_board[2] = "#.####.#####.##.#####.####Z#";

        let result = MapTileParser::parse_board(&invalid_board);
        assert!(matches!(
            result.unwrap_err(),
            ParseError::UnknownCharacter { character: 'Z', x: 26, y: 2 }
        ));
    }

    #[test]
    fn test_parse_board_ragged_row() {
        let result = MapTileParser::parse_board(&["####", "#  ", "####"]);
        assert!(matches!(
            result.unwrap_err(),
            ParseError::RaggedRow { row: 1, expected: 4, found: 3 }
        ));
    }

    #[test]
    fn test_parse_board_empty() {
        assert!(matches!(MapTileParser::parse_board(&[]).unwrap_err(), ParseError::EmptyBoard));
    }
}
