//! Board dimension check.

use super::{Check, CheckKind};
use crate::config::BOARD_SIZE;
use crate::errors::{BattlefieldError, ShapeError};
use crate::grid::Grid;

/// Checks that the grid has exactly `BOARD_SIZE` rows of `BOARD_SIZE` cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeChecker;

impl ShapeChecker {
    /// Creates a new shape checker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Check for ShapeChecker {
    fn name(&self) -> &'static str {
        "shape"
    }

    fn kind(&self) -> CheckKind {
        CheckKind::Shape
    }

    fn validate(&self, grid: &Grid) -> Result<(), BattlefieldError> {
        if grid.row_count() != BOARD_SIZE {
            return Err(ShapeError::WrongRowCount {
                expected: BOARD_SIZE,
                found: grid.row_count(),
            }
            .into());
        }

        if let Some((row, cells)) = grid
            .rows()
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != BOARD_SIZE)
        {
            return Err(ShapeError::WrongColumnCount {
                row,
                expected: BOARD_SIZE,
                found: cells.len(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn test_accepts_board_size() {
        assert!(ShapeChecker::new().validate(&Grid::empty(BOARD_SIZE)).is_ok());
    }

    #[test]
    fn test_wrong_row_count() {
        let grid = Grid::new(vec![vec![Cell::Empty; BOARD_SIZE]; BOARD_SIZE - 1]);
        let err = ShapeChecker::new().validate(&grid).unwrap_err();
        assert_eq!(
            err,
            BattlefieldError::Shape(ShapeError::WrongRowCount { expected: 10, found: 9 })
        );
    }

    #[test]
    fn test_wrong_column_count() {
        let mut rows = vec![vec![Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        rows[4].push(Cell::Empty);
        let err = ShapeChecker::new().validate(&Grid::new(rows)).unwrap_err();
        assert_eq!(
            err,
            BattlefieldError::Shape(ShapeError::WrongColumnCount {
                row: 4,
                expected: 10,
                found: 11,
            })
        );
    }

    #[test]
    fn test_empty_input() {
        let err = ShapeChecker::new().validate(&Grid::default()).unwrap_err();
        assert_eq!(err.code(), "SHAPE-001-ROWS");
    }
}
