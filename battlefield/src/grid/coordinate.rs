//! Coordinates and neighbor snapshots.

use super::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (row, column) position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps by a signed offset.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        match (self.row.checked_add_signed(d_row), self.col.checked_add_signed(d_col)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// States of the four cells sharing an edge with a given cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrthogonalNeighbors {
    /// Same row, previous column.
    pub left: Cell,
    /// Same row, next column.
    pub right: Cell,
    /// Previous row, same column.
    pub upper: Cell,
    /// Next row, same column.
    pub lower: Cell,
}

impl OrthogonalNeighbors {
    /// Number of occupied neighbors.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        [self.left, self.right, self.upper, self.lower]
            .iter()
            .filter(|cell| cell.is_occupied())
            .count()
    }

    /// Returns true if the occupied neighbors can belong to one straight ship.
    ///
    /// Zero or one occupied neighbor is always fine; two are fine only as
    /// the left/right pair or the upper/lower pair.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        let horizontal = self.left.is_occupied() || self.right.is_occupied();
        let vertical = self.upper.is_occupied() || self.lower.is_occupied();

        match self.occupied_count() {
            0 | 1 => true,
            2 => horizontal != vertical,
            _ => false,
        }
    }
}

impl fmt::Display for OrthogonalNeighbors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left {}, right {}, upper {}, lower {}",
            self.left, self.right, self.upper, self.lower
        )
    }
}

/// States of the four cells sharing only a corner with a given cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagonalNeighbors {
    /// Previous row, previous column.
    pub upper_left: Cell,
    /// Previous row, next column.
    pub upper_right: Cell,
    /// Next row, previous column.
    pub lower_left: Cell,
    /// Next row, next column.
    pub lower_right: Cell,
}

impl DiagonalNeighbors {
    /// Returns true if any corner neighbor is occupied.
    #[must_use]
    pub fn any_occupied(&self) -> bool {
        [self.upper_left, self.upper_right, self.lower_left, self.lower_right]
            .iter()
            .any(|cell| cell.is_occupied())
    }
}
