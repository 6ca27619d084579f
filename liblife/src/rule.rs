use crate::grid::Cell;

/// Neighbor counts that keep a live cell alive.
pub const SURVIVE: [usize; 2] = [2, 3];

/// Neighbor counts that bring a dead cell to life.
pub const BIRTH: [usize; 1] = [3];

/// Standard B3/S23 transition for a single cell.
pub fn next_cell_state(current: Cell, live_neighbors: usize) -> Cell {
    let alive = match current {
        Cell::Alive => SURVIVE.contains(&live_neighbors),
        Cell::Dead => BIRTH.contains(&live_neighbors),
    };

    Cell::from(alive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_survives_only_on_two_or_three() {
        for count in 0..=8 {
            let expected = if count == 2 || count == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(next_cell_state(Cell::Alive, count), expected, "count {count}");
        }
    }

    #[test]
    fn dead_cell_is_born_only_on_three() {
        for count in 0..=8 {
            let expected = if count == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(next_cell_state(Cell::Dead, count), expected, "count {count}");
        }
    }
}
