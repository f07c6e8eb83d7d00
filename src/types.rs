use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::BoardError;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

const COLUMNS: &str = "abcdefgh";

/// State of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

impl Cell {
    /// The other side. `Empty` has no opposite and maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Cell::Dark => Cell::Light,
            Cell::Light => Cell::Dark,
            Cell::Empty => Cell::Empty,
        }
    }

    pub fn is_side(self) -> bool {
        self != Cell::Empty
    }

    /// Console marker: Dark plays black, Light plays white.
    pub fn symbol(self) -> char {
        match self {
            Cell::Dark => 'B',
            Cell::Light => 'W',
            Cell::Empty => '.',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Cell::Dark => "Black",
            Cell::Light => "White",
            Cell::Empty => "Empty",
        }
    }

    /// Numeric code used by serialized snapshots: 0=empty, 1=dark, 2=light.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Dark => 1,
            Cell::Light => 2,
        }
    }
}

/// One of the eight unit offsets a flip chain can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction { dx: 1, dy: 1 },
        Direction { dx: 1, dy: 0 },
        Direction { dx: 1, dy: -1 },
        Direction { dx: 0, dy: -1 },
        Direction { dx: -1, dy: -1 },
        Direction { dx: -1, dy: 0 },
        Direction { dx: -1, dy: 1 },
        Direction { dx: 0, dy: 1 },
    ];
}

/// A board square. `x` is the column (a..h), `y` the row (1..8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Coordinate {
    x: u8,
    y: u8,
}

impl Coordinate {
    pub fn new(x: usize, y: usize) -> Result<Self, BoardError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(BoardError::OutOfRange { x, y });
        }
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Convert from a row-major square index.
    pub fn from_index(index: usize) -> Result<Self, BoardError> {
        if index >= NUM_SQUARES {
            return Err(BoardError::OutOfRange {
                x: index % BOARD_SIZE,
                y: index / BOARD_SIZE,
            });
        }
        Ok(Self {
            x: (index % BOARD_SIZE) as u8,
            y: (index / BOARD_SIZE) as u8,
        })
    }

    /// All 64 squares in row-major order (y, then x, ascending).
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..NUM_SQUARES).map(|index| Self {
            x: (index % BOARD_SIZE) as u8,
            y: (index / BOARD_SIZE) as u8,
        })
    }

    pub fn x(self) -> usize {
        self.x as usize
    }

    pub fn y(self) -> usize {
        self.y as usize
    }

    /// Row-major square index, `y * 8 + x`.
    pub fn index(self) -> usize {
        self.y() * BOARD_SIZE + self.x()
    }

    /// The neighbouring square in `direction`, or `None` past the edge.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let x = self.x as i8 + direction.dx;
        let y = self.y as i8 + direction.dy;
        let range = 0..BOARD_SIZE as i8;
        if range.contains(&x) && range.contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Every square from the neighbour in `direction` up to the edge.
    pub fn ray(self, direction: Direction) -> impl Iterator<Item = Coordinate> {
        std::iter::successors(self.step(direction), move |c| c.step(direction))
    }
}

/// Move notation: lower-case column letter then 1-based row ("d3").
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = COLUMNS.chars().nth(self.x()).ok_or(fmt::Error)?;
        write!(f, "{}{}", col, self.y + 1)
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || BoardError::Parse(s.to_string());
        let mut chars = s.trim().chars();
        let col = chars.next().ok_or_else(parse_err)?.to_ascii_lowercase();
        let x = COLUMNS.find(col).ok_or_else(parse_err)?;
        let row = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(parse_err)? as usize;
        if row == 0 || chars.next().is_some() {
            return Err(parse_err());
        }
        Self::new(x, row - 1).map_err(|_| parse_err())
    }
}

/// Joins move strings with ", " (e.g. "d3, c4").
pub fn format_moves<'a>(moves: impl IntoIterator<Item = &'a Coordinate>) -> String {
    moves
        .into_iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Public board state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// Row-major cell codes, see [`Cell::code`].
    pub cells: Vec<u8>,
    pub dark_count: u8,
    pub light_count: u8,
    pub empty_count: u8,
}
