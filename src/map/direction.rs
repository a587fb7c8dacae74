use glam::IVec2;
use strum_macros::{AsRefStr, Display};

/// The four cardinal directions.
///
/// Grid space grows downward, so `Up` is `-Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display)]
#[repr(usize)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// The four cardinal directions, in decision order.
    /// Direction resolution breaks ties by position in this array.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the unit offset of this direction as an IVec2.
    pub const fn as_ivec2(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    /// Returns the direction as a usize (0-3). Constant time.
    /// This is useful for indexing into arrays.
    pub const fn as_usize(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        dir.as_ivec2()
    }
}
