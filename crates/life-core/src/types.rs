//! Core type definitions for the automaton.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Character used by the ascii file format and the text rendering
    pub fn to_char(self) -> char {
        match self {
            Cell::Alive => '#',
            Cell::Dead => ' ',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Cell::Alive),
            ' ' => Some(Cell::Dead),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 2D position in a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Neighbouring position for a grid of the given dimensions.
    ///
    /// Bounded grids return `None` when the neighbour falls off an edge.
    /// Toroidal grids wrap each axis modulo its extent, so `width` and
    /// `height` must both be non-zero.
    pub fn offset(&self, dx: i32, dy: i32, width: u32, height: u32, toroidal: bool) -> Option<Self> {
        let x = i64::from(self.x) + i64::from(dx);
        let y = i64::from(self.y) + i64::from(dy);
        let (w, h) = (i64::from(width), i64::from(height));

        if toroidal {
            Some(Self {
                x: x.rem_euclid(w) as u32,
                y: y.rem_euclid(h) as u32,
            })
        } else if (0..w).contains(&x) && (0..h).contains(&y) {
            Some(Self {
                x: x as u32,
                y: y as u32,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The eight neighbours of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    pub fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::SouthEast,
            Direction::SouthWest,
        ]
    }
}
