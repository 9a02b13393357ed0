//! Catalog of well-known patterns.

use crate::grid::Grid;
use life_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

const GLIDER: &[(u32, u32)] = &[(0, 2), (1, 2), (2, 2), (2, 1), (1, 0)];

const R_PENTOMINO: &[(u32, u32)] = &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];

const LIGHT_WEIGHT_SPACESHIP: &[(u32, u32)] = &[
    (1, 0),
    (4, 0),
    (0, 1),
    (0, 2),
    (4, 2),
    (0, 3),
    (1, 3),
    (2, 3),
    (3, 3),
];

/// 3x3 glider travelling towards +x, +y
pub fn glider() -> Result<Grid> {
    Pattern::Glider.grid()
}

/// 3x3 methuselah that stabilises after 1103 generations on an unbounded plane
pub fn r_pentomino() -> Result<Grid> {
    Pattern::RPentomino.grid()
}

/// 5x4 spaceship travelling towards -x
pub fn light_weight_spaceship() -> Result<Grid> {
    Pattern::LightWeightSpaceship.grid()
}

/// Named pattern, selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Glider,
    RPentomino,
    LightWeightSpaceship,
}

impl Pattern {
    pub fn all() -> [Pattern; 3] {
        [
            Pattern::Glider,
            Pattern::RPentomino,
            Pattern::LightWeightSpaceship,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Glider => "glider",
            Pattern::RPentomino => "r-pentomino",
            Pattern::LightWeightSpaceship => "light-weight-spaceship",
        }
    }

    /// Bounding box size and alive cells
    pub fn shape(&self) -> (u32, u32, &'static [(u32, u32)]) {
        match self {
            Pattern::Glider => (3, 3, GLIDER),
            Pattern::RPentomino => (3, 3, R_PENTOMINO),
            Pattern::LightWeightSpaceship => (5, 4, LIGHT_WEIGHT_SPACESHIP),
        }
    }

    pub fn grid(&self) -> Result<Grid> {
        let (width, height, alive) = self.shape();
        Grid::from_alive(width, height, alive)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "glider" => Ok(Pattern::Glider),
            "r-pentomino" | "rpentomino" => Ok(Pattern::RPentomino),
            "lwss" | "light-weight-spaceship" => Ok(Pattern::LightWeightSpaceship),
            _ => Err(Error::UnknownPattern(s.to_string())),
        }
    }
}

/// A dead `width x height` grid with `pattern` merged at its centre
pub fn place_centered(pattern: &Grid, width: u32, height: u32) -> Result<Grid> {
    let mut grid = Grid::new(width, height);
    let x0 = width.saturating_sub(pattern.width()) / 2;
    let y0 = height.saturating_sub(pattern.height()) / 2;
    grid.merge(pattern, x0, y0, true)?;
    Ok(grid)
}
