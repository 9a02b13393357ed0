//! Generation stepping engine.

use crate::grid::Grid;
use life_core::{Cell, Direction, Error, Position, Result};
use std::mem;
use tracing::{debug, info, instrument, trace};

/// A Game of Life world.
///
/// Holds the current state and an equally sized scratch grid. Each step
/// writes the next generation into the scratch grid and then swaps the two
/// buffers, so neighbour counts always read the pre-step state.
#[derive(Debug, Clone, Default)]
pub struct World {
    current: Grid,
    scratch: Grid,
    generation: u64,
    report_interval: u64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn square(size: u32) -> Self {
        Self::with_size(size, size)
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self::from_grid(Grid::new(width, height))
    }

    /// Wrap an existing grid as the initial state
    pub fn from_grid(initial: Grid) -> Self {
        let scratch = Grid::new(initial.width(), initial.height());
        Self {
            current: initial,
            scratch,
            generation: 0,
            report_interval: 0,
        }
    }

    /// Log progress every `interval` generations while advancing (0 disables)
    pub fn with_report_interval(mut self, interval: u64) -> Self {
        self.report_interval = interval;
        self
    }

    pub fn width(&self) -> u32 {
        self.current.width()
    }

    pub fn height(&self) -> u32 {
        self.current.height()
    }

    pub fn total_cells(&self) -> usize {
        self.current.total_cells()
    }

    pub fn count_alive(&self) -> usize {
        self.current.count_alive()
    }

    pub fn count_dead(&self) -> usize {
        self.current.count_dead()
    }

    /// Number of steps applied since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> &Grid {
        &self.current
    }

    pub fn into_state(self) -> Grid {
        self.current
    }

    /// Resize the current state, keeping cells in the overlap. Scratch
    /// contents are overwritten by the next step, so only its size matters.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.current.resize(width, height);
        self.scratch = Grid::new(width, height);
    }

    pub fn resize_square(&mut self, size: u32) {
        self.resize(size, size);
    }

    /// Count alive cells among the eight neighbours of (x, y).
    ///
    /// Off-grid neighbours count as dead unless `toroidal` is set, in which
    /// case both axes wrap.
    pub fn count_neighbours(&self, x: u32, y: u32, toroidal: bool) -> Result<u8> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(alive_neighbours(&self.current, Position::new(x, y), toroidal))
    }

    /// Advance one generation
    pub fn step(&mut self, toroidal: bool) {
        debug_assert_eq!(self.current.width(), self.scratch.width());
        debug_assert_eq!(self.current.height(), self.scratch.height());

        let current = &self.current;
        for ((pos, cell), slot) in current.iter().zip(self.scratch.cells_mut()) {
            *slot = next_state(cell, alive_neighbours(current, pos, toroidal));
        }

        mem::swap(&mut self.current, &mut self.scratch);
        self.scratch.cells_mut().fill(Cell::Dead);
        self.generation += 1;

        trace!(generation = self.generation, "Step complete");
    }

    /// Apply `steps` generations in sequence
    #[instrument(skip(self), fields(width = self.width(), height = self.height()))]
    pub fn advance(&mut self, steps: u64, toroidal: bool) {
        for i in 1..=steps {
            self.step(toroidal);

            if self.report_interval > 0 && i % self.report_interval == 0 {
                info!(
                    "Generation {} ({}/{}): {} cells alive",
                    self.generation,
                    i,
                    steps,
                    self.count_alive()
                );
            }
        }

        debug!(
            generation = self.generation,
            alive = self.count_alive(),
            "Advanced {} generations",
            steps
        );
    }
}

impl From<Grid> for World {
    fn from(initial: Grid) -> Self {
        Self::from_grid(initial)
    }
}

/// Standard B3/S23 rule
pub fn next_state(cell: Cell, neighbours: u8) -> Cell {
    match neighbours {
        3 => Cell::Alive,
        2 => cell,
        _ => Cell::Dead,
    }
}

fn alive_neighbours(grid: &Grid, pos: Position, toroidal: bool) -> u8 {
    let (width, height) = (grid.width(), grid.height());
    let cells = grid.cells();

    Direction::all()
        .iter()
        .filter_map(|dir| {
            let (dx, dy) = dir.to_delta();
            pos.offset(dx, dy, width, height, toroidal)
        })
        .filter(|n| cells[n.x as usize + width as usize * n.y as usize].is_alive())
        .count() as u8
}
