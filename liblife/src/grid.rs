use std::fmt;

use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::GridError, pos::Position};

/// Draws above this value bring a cell to life when randomizing, leaving roughly 30% alive.
pub const DEFAULT_ALIVE_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Cell {
    Alive,

    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }
}

/// Extents of a grid. Both are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension {
                rows: rows as isize,
                cols: cols as isize,
            });
        }

        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        (0..self.rows)
            .cartesian_product(0..self.cols)
            .map(Position::from)
    }
}

impl TryFrom<[isize; 2]> for Dimensions {
    type Error = GridError;

    fn try_from([rows, cols]: [isize; 2]) -> Result<Self, Self::Error> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }

        Self::new(rows as usize, cols as usize)
    }
}

/// One generation of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimensions: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Ok(Self::with_dimensions(Dimensions::new(rows, cols)?))
    }

    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![Cell::default(); dimensions.cell_count()],
        }
    }

    pub fn with_alive<I, P>(rows: usize, cols: usize, alive: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        let mut grid = Self::new(rows, cols)?;

        for pos in alive {
            grid.set(pos, Cell::Alive)?;
        }

        Ok(grid)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn cols(&self) -> usize {
        self.dimensions.cols
    }

    pub fn get<P>(&self, pos: P) -> Result<Cell, GridError>
    where
        P: Into<Position>,
    {
        let index = self.checked_index(pos.into())?;
        Ok(self.cells[index])
    }

    pub fn set<P>(&mut self, pos: P, cell: Cell) -> Result<(), GridError>
    where
        P: Into<Position>,
    {
        let index = self.checked_index(pos.into())?;
        self.cells[index] = cell;
        Ok(())
    }

    pub fn toggle<P>(&mut self, pos: P) -> Result<Cell, GridError>
    where
        P: Into<Position>,
    {
        let index = self.checked_index(pos.into())?;
        let toggled = self.cells[index].toggled();
        self.cells[index] = toggled;
        Ok(toggled)
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Brings each cell to life when a uniform draw in `[0, 1)` exceeds `threshold`.
    /// Cells that lose the draw keep whatever state they had.
    pub fn randomize(&mut self, threshold: f64) {
        self.randomize_with(&mut rand::rng(), threshold);
    }

    pub fn randomize_with<R>(&mut self, rng: &mut R, threshold: f64)
    where
        R: Rng + ?Sized,
    {
        for cell in &mut self.cells {
            if rng.random::<f64>() > threshold {
                *cell = Cell::Alive;
            }
        }

        debug!(
            threshold,
            alive = self.live_count(),
            total = self.cells.len(),
            "Randomized grid"
        );
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn row_cells(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.dimensions.cols)
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, Cell)> {
        self.dimensions.positions().zip(self.cells.iter().copied())
    }

    pub fn alive_positions(&self) -> impl Iterator<Item = Position> {
        self.enumerate_cells()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(pos, _)| pos)
    }

    // Callers must have checked the position against the dimensions already.
    pub(crate) fn cell_unchecked(&self, pos: Position) -> Cell {
        self.cells[pos.col + pos.row * self.dimensions.cols]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    fn checked_index(&self, pos: Position) -> Result<usize, GridError> {
        if !self.dimensions.contains(pos) {
            return Err(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.dimensions.rows,
                cols: self.dimensions.cols,
            });
        }

        Ok(pos.col + pos.row * self.dimensions.cols)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.row_cells().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }

            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
        }

        Ok(())
    }
}
