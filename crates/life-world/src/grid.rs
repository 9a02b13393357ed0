//! Dense 2D grid of cells.

use life_core::{Cell, Error, Position, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bounded, row-major grid of cells.
///
/// The cell buffer always holds exactly `width * height` cells and is owned
/// exclusively by the grid. `crop` and `rotate` return independent copies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct RawGrid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = Error;

    fn try_from(raw: RawGrid) -> Result<Self> {
        Grid::from_cells(raw.width, raw.height, raw.cells)
    }
}

impl Grid {
    /// Create a grid of the given size with every cell dead
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::Dead; size],
        }
    }

    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Build a grid from a row-major cell buffer
    pub fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(Error::format(format!(
                "{}x{} grid needs {} cells, got {}",
                width,
                height,
                expected,
                cells.len()
            )));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid with the listed coordinates alive
    pub fn from_alive(width: u32, height: u32, alive: &[(u32, u32)]) -> Result<Self> {
        let mut grid = Self::new(width, height);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive)?;
        }
        Ok(grid)
    }

    /// Random soup where each cell is alive with probability `density`
    pub fn random<R: Rng + ?Sized>(width: u32, height: u32, density: f32, rng: &mut R) -> Self {
        let mut grid = Self::new(width, height);
        for cell in &mut grid.cells {
            *cell = Cell::from(rng.gen::<f32>() < density);
        }
        grid
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn count_dead(&self) -> usize {
        self.total_cells() - self.count_alive()
    }

    /// Get the cell at (x, y)
    pub fn get(&self, x: u32, y: u32) -> Result<Cell> {
        let index = self.checked_index(x, y)?;
        Ok(self.cells[index])
    }

    /// Get a mutable reference to the cell at (x, y)
    pub fn get_mut(&mut self, x: u32, y: u32) -> Result<&mut Cell> {
        let index = self.checked_index(x, y)?;
        Ok(&mut self.cells[index])
    }

    /// Set the cell at (x, y)
    pub fn set(&mut self, x: u32, y: u32, value: Cell) -> Result<()> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable row-major view. The length is fixed, so the size invariant holds.
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterator over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let width = self.width as usize;
        (0..self.height as usize).map(move |y| &self.cells[y * width..(y + 1) * width])
    }

    /// Get position from index
    pub fn index_to_pos(&self, index: usize) -> Position {
        let width = self.width as usize;
        Position::new((index % width) as u32, (index / width) as u32)
    }

    /// Iterator over all cells with positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.index_to_pos(i), *cell))
    }

    pub fn alive_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(pos, _)| pos)
    }

    /// Resize in place, keeping every cell inside both the old and new
    /// extents. Newly exposed cells are dead.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width == self.width && new_height == self.height {
            return;
        }

        let mut resized = Self::new(new_width, new_height);
        let keep_width = self.width.min(new_width) as usize;
        let keep_height = self.height.min(new_height) as usize;

        for y in 0..keep_height {
            let src = y * self.width as usize;
            let dst = y * new_width as usize;
            resized.cells[dst..dst + keep_width]
                .copy_from_slice(&self.cells[src..src + keep_width]);
        }

        *self = resized;
    }

    pub fn resize_square(&mut self, size: u32) {
        self.resize(size, size);
    }

    /// Copy out the half-open window `[x0, x1) x [y0, y1)`.
    pub fn crop(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> Result<Grid> {
        if x0 > x1 || y0 > y1 {
            return Err(Error::InvalidRange { x0, y0, x1, y1 });
        }
        if x1 > self.width || y1 > self.height {
            return Err(self.out_of_bounds(x1, y1));
        }

        Ok(self.copy_window(x0, y0, x1, y1))
    }

    /// Overlay `other` with its origin at (x0, y0).
    ///
    /// With `alive_only` set, only alive cells of `other` are written; dead
    /// cells leave `self` untouched. The whole placed region must fit, and
    /// nothing is written when it does not.
    pub fn merge(&mut self, other: &Grid, x0: u32, y0: u32, alive_only: bool) -> Result<()> {
        let x1 = u64::from(x0) + u64::from(other.width);
        let y1 = u64::from(y0) + u64::from(other.height);
        if x1 > u64::from(self.width) || y1 > u64::from(self.height) {
            return Err(self.out_of_bounds(
                u32::try_from(x1).unwrap_or(u32::MAX),
                u32::try_from(y1).unwrap_or(u32::MAX),
            ));
        }

        let (x0, y0) = (x0 as usize, y0 as usize);
        for (dy, row) in other.rows().enumerate() {
            let dst = (y0 + dy) * self.width as usize + x0;
            let target = &mut self.cells[dst..dst + row.len()];
            if alive_only {
                for (cell, &src) in target.iter_mut().zip(row) {
                    if src.is_alive() {
                        *cell = Cell::Alive;
                    }
                }
            } else {
                target.copy_from_slice(row);
            }
        }

        Ok(())
    }

    /// Rotate clockwise by `turns * 90` degrees. Negative turns rotate
    /// anticlockwise.
    pub fn rotate(&self, turns: i32) -> Grid {
        let (w, h) = (self.width, self.height);

        match turns.rem_euclid(4) {
            0 => self.clone(),
            1 => {
                let mut rotated = Grid::new(h, w);
                for (pos, cell) in self.iter() {
                    let index = rotated.index(h - 1 - pos.y, pos.x);
                    rotated.cells[index] = cell;
                }
                rotated
            }
            2 => {
                let mut rotated = self.clone();
                rotated.cells.reverse();
                rotated
            }
            _ => {
                let mut rotated = Grid::new(h, w);
                for (pos, cell) in self.iter() {
                    let index = rotated.index(pos.y, w - 1 - pos.x);
                    rotated.cells[index] = cell;
                }
                rotated
            }
        }
    }

    /// Smallest half-open window `(x0, y0, x1, y1)` containing every alive
    /// cell, or `None` if the grid has none.
    pub fn bounding_box(&self) -> Option<(u32, u32, u32, u32)> {
        self.alive_positions().fold(None, |bounds, pos| {
            let (x0, y0, x1, y1) = bounds.unwrap_or((pos.x, pos.y, pos.x + 1, pos.y + 1));
            Some((
                x0.min(pos.x),
                y0.min(pos.y),
                x1.max(pos.x + 1),
                y1.max(pos.y + 1),
            ))
        })
    }

    /// Crop to the bounding box. An all-dead grid trims to 0x0.
    pub fn trimmed(&self) -> Grid {
        match self.bounding_box() {
            Some((x0, y0, x1, y1)) => self.copy_window(x0, y0, x1, y1),
            None => Grid::default(),
        }
    }

    fn copy_window(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> Grid {
        let mut window = Grid::new(x1 - x0, y1 - y0);
        let (x0, x1) = (x0 as usize, x1 as usize);
        for (dy, y) in (y0..y1).enumerate() {
            let src = y as usize * self.width as usize;
            let dst = dy * window.width as usize;
            window.cells[dst..dst + (x1 - x0)].copy_from_slice(&self.cells[src + x0..src + x1]);
        }
        window
    }

    fn index(&self, x: u32, y: u32) -> usize {
        x as usize + self.width as usize * y as usize
    }

    fn checked_index(&self, x: u32, y: u32) -> Result<usize> {
        if x < self.width && y < self.height {
            Ok(self.index(x, y))
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    fn out_of_bounds(&self, x: u32, y: u32) -> Error {
        Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("+{}+", "-".repeat(self.width as usize));
        writeln!(f, "{}", border)?;
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.to_char()).collect();
            writeln!(f, "|{}|", line)?;
        }
        writeln!(f, "{}", border)
    }
}
