//! Board fixtures.

use crate::config::BOARD_SIZE;
use crate::grid::{Cell, Grid};

/// The ships of [`valid_fleet`], as lists of occupied cells.
pub const VALID_FLEET_SHIPS: [&[(usize, usize)]; 10] = [
    &[(0, 0), (0, 1), (0, 2), (0, 3)],
    &[(0, 5), (0, 6), (0, 7)],
    &[(2, 0), (3, 0), (4, 0)],
    &VALID_FLEET_DESTROYER,
    &[(2, 5), (3, 5)],
    &[(6, 0), (7, 0)],
    &[(5, 7)],
    &[(7, 9)],
    &[(9, 7)],
    &[(9, 9)],
];

/// One of the 2-cell ships of [`valid_fleet`].
pub const VALID_FLEET_DESTROYER: [(usize, usize); 2] = [(2, 2), (2, 3)];

/// A board with every cell empty.
#[must_use]
pub fn empty_board() -> Grid {
    Grid::empty(BOARD_SIZE)
}

/// A board with exactly the given cells occupied.
///
/// Coordinates outside the board are ignored.
#[must_use]
pub fn board_with(cells: &[(usize, usize)]) -> Grid {
    let mut grid = empty_board();
    for &(row, col) in cells {
        grid.set(row, col, Cell::Occupied);
    }
    grid
}

/// A board holding a complete, legally placed fleet.
#[must_use]
pub fn valid_fleet() -> Grid {
    let cells: Vec<(usize, usize)> = VALID_FLEET_SHIPS
        .iter()
        .flat_map(|ship| ship.iter().copied())
        .collect();
    board_with(&cells)
}

/// A board of the right height whose last row is one cell short.
#[must_use]
pub fn ragged_board() -> Grid {
    let mut rows = valid_fleet().rows().to_vec();
    if let Some(last) = rows.last_mut() {
        last.pop();
    }
    Grid::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fleet_has_twenty_cells() {
        assert_eq!(valid_fleet().occupied_count(), 20);
    }

    #[test]
    fn test_board_with_ignores_outside_cells() {
        let grid = board_with(&[(1, 1), (10, 10)]);
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_ragged_board() {
        let grid = ragged_board();
        assert_eq!(grid.row_count(), BOARD_SIZE);
        assert_eq!(grid.rows()[BOARD_SIZE - 1].len(), BOARD_SIZE - 1);
    }
}
