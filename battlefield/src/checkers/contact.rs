//! Ship straightness and contact check.

use super::{Check, CheckKind};
use crate::errors::{BattlefieldError, ContactError};
use crate::grid::Grid;
use tracing::trace;

/// Checks that every ship is a straight line and that no two ships touch.
///
/// The grid is scanned twice in row-major order. The first pass rejects
/// cells whose occupied edge neighbors are not on one axis; the second
/// rejects cells with an occupied corner neighbor. Each pass stops at the
/// first offending cell, so bends are always reported ahead of corner
/// contact.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactChecker;

impl ContactChecker {
    /// Creates a new contact checker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn check_straight(grid: &Grid) -> Result<(), ContactError> {
        for at in grid.occupied_cells() {
            let neighbors = grid.orthogonal_neighbors(at);
            if !neighbors.is_straight() {
                return Err(ContactError::BentShip {
                    row: at.row,
                    col: at.col,
                    neighbors,
                });
            }
        }
        Ok(())
    }

    fn check_diagonals(grid: &Grid) -> Result<(), ContactError> {
        match grid
            .occupied_cells()
            .find(|at| grid.diagonal_neighbors(*at).any_occupied())
        {
            Some(at) => Err(ContactError::DiagonalContact {
                row: at.row,
                col: at.col,
            }),
            None => Ok(()),
        }
    }
}

impl Check for ContactChecker {
    fn name(&self) -> &'static str {
        "contact"
    }

    fn kind(&self) -> CheckKind {
        CheckKind::Contact
    }

    fn validate(&self, grid: &Grid) -> Result<(), BattlefieldError> {
        Self::check_straight(grid)?;
        Self::check_diagonals(grid)?;
        trace!(occupied = grid.occupied_count(), "ships are straight and separated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, OrthogonalNeighbors};
    use crate::testing::{board_with, empty_board, valid_fleet};
    use pretty_assertions::assert_eq;

    fn contact_error(grid: &Grid) -> ContactError {
        match ContactChecker::new().validate(grid) {
            Err(BattlefieldError::Contact(err)) => err,
            other => panic!("expected contact error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_board_passes() {
        assert!(ContactChecker::new().validate(&empty_board()).is_ok());
    }

    #[test]
    fn test_isolated_cell_passes() {
        assert!(ContactChecker::new().validate(&board_with(&[(5, 5)])).is_ok());
    }

    #[test]
    fn test_valid_fleet_passes() {
        assert!(ContactChecker::new().validate(&valid_fleet()).is_ok());
    }

    #[test]
    fn test_straight_ships_on_edges_pass() {
        let grid = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3), (9, 9), (8, 9)]);
        assert!(ContactChecker::new().validate(&grid).is_ok());
    }

    #[test]
    fn test_diagonal_contact() {
        let grid = board_with(&[(0, 0), (1, 1)]);
        assert_eq!(
            contact_error(&grid),
            ContactError::DiagonalContact { row: 0, col: 0 }
        );
    }

    #[test]
    fn test_bent_ship() {
        let grid = board_with(&[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(
            contact_error(&grid),
            ContactError::BentShip {
                row: 0,
                col: 1,
                neighbors: OrthogonalNeighbors {
                    left: Cell::Occupied,
                    right: Cell::Empty,
                    upper: Cell::Empty,
                    lower: Cell::Occupied,
                },
            }
        );
    }

    #[test]
    fn test_bend_reported_before_diagonal() {
        let grid = board_with(&[(0, 0), (1, 1), (5, 3), (5, 4), (6, 4)]);
        assert!(matches!(
            contact_error(&grid),
            ContactError::BentShip { row: 5, col: 4, .. }
        ));
    }

    #[test]
    fn test_t_junction_fails() {
        let grid = board_with(&[(2, 1), (2, 2), (2, 3), (3, 2)]);
        assert!(matches!(
            contact_error(&grid),
            ContactError::BentShip { row: 2, col: 2, .. }
        ));
    }

    #[test]
    fn test_square_block_fails() {
        let grid = board_with(&[(4, 4), (4, 5), (5, 4), (5, 5)]);
        assert!(matches!(contact_error(&grid), ContactError::BentShip { .. }));
    }

    #[test]
    fn test_long_line_passes() {
        let grid = board_with(&[(7, 0), (7, 1), (7, 2), (7, 3), (7, 4)]);
        assert!(ContactChecker::new().validate(&grid).is_ok());
    }

    #[test]
    fn test_input_is_not_modified() {
        let grid = valid_fleet();
        let before = grid.clone();
        let _ = ContactChecker::new().validate(&grid);
        assert_eq!(grid, before);
    }
}
