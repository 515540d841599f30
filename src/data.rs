use std::fmt::{self, Display, Formatter};

/// Levels larger than this in either dimension are rejected by the parser.
pub const MAX_SIZE: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Ground,
    Wall,
    Box,
    BoxOnGoal,
    Goal,
}

impl Cell {
    /// A box or the player can move here.
    pub fn is_walkable(self) -> bool {
        self == Cell::Ground || self == Cell::Goal
    }

    pub fn has_box(self) -> bool {
        self == Cell::Box || self == Cell::BoxOnGoal
    }

    /// The digit used by the original `.dat` level format.
    pub(crate) fn digit(self) -> char {
        match self {
            Cell::Ground => '0',
            Cell::Wall => '1',
            Cell::Box => '2',
            Cell::BoxOnGoal => '3',
            Cell::Goal => '4',
        }
    }
}

// the discriminants double as the digits of the naive solver's odometer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

/// Probing order used by every search method.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub fn from_index(index: u8) -> Option<Dir> {
        DIRECTIONS.get(usize::from(index)).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    pub(crate) fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}
