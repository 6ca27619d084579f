//! Generation stepping over a bounded grid.
//!
//! Neighborhoods are the 3x3 window around a cell clamped to the grid edges, so
//! edge cells have five candidate neighbors and corner cells three. Nothing wraps.

use itertools::Itertools;

use crate::{
    error::GridError,
    grid::{Dimensions, Grid},
    pos::Position,
    rule::next_cell_state,
};

/// Counts the live cells in the clamped 3x3 window around `pos`, excluding `pos` itself.
pub fn count_live_neighbors<P>(grid: &Grid, pos: P) -> Result<usize, GridError>
where
    P: Into<Position>,
{
    let pos = pos.into();

    // Bounds check only; the cell value is unused.
    grid.get(pos)?;

    Ok(live_neighbors(grid, pos))
}

/// Positions inside the grid that neighbor `pos`.
pub fn neighbor_positions(dimensions: Dimensions, pos: Position) -> impl Iterator<Item = Position> {
    let row_min = pos.row.saturating_sub(1);
    let row_max = (pos.row + 1).min(dimensions.rows() - 1);
    let col_min = pos.col.saturating_sub(1);
    let col_max = (pos.col + 1).min(dimensions.cols() - 1);

    (row_min..=row_max)
        .cartesian_product(col_min..=col_max)
        .map(Position::from)
        .filter(move |neighbor| *neighbor != pos)
}

/// Writes the generation following `source` into `destination`, overwriting every cell.
///
/// # Panics
///
/// Panics if the two grids have different dimensions.
pub fn step(source: &Grid, destination: &mut Grid) {
    assert_eq!(
        source.dimensions(),
        destination.dimensions(),
        "source and destination grids must have the same dimensions"
    );

    let next_cells = destination.cells_mut();

    for (pos, next_cell) in source.dimensions().positions().zip(next_cells.iter_mut()) {
        let current = source.cell_unchecked(pos);
        *next_cell = next_cell_state(current, live_neighbors(source, pos));
    }
}

fn live_neighbors(grid: &Grid, pos: Position) -> usize {
    neighbor_positions(grid.dimensions(), pos)
        .filter(|neighbor| grid.cell_unchecked(*neighbor).is_alive())
        .count()
}
