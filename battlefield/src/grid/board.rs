//! The grid supplied by callers.

use super::{Cell, Coordinate, DiagonalNeighbors, OrthogonalNeighbors};
use crate::errors::GridError;
use serde::{Deserialize, Serialize};

/// A row-major grid of cells.
///
/// The grid accepts any number of rows of any length; whether it has the
/// board dimensions is decided by the shape check, not at construction.
/// Lookups outside the stored cells resolve to [`Cell::Empty`], so every
/// grid behaves as if surrounded by an empty border.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a grid from rows of cells.
    #[must_use]
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Creates a `size` by `size` grid with every cell empty.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Empty; size]; size],
        }
    }

    /// Parses a grid from a JSON array of arrays of 0/1 values.
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        let raw: Vec<Vec<u8>> = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Serializes the grid as a JSON array of arrays of 0/1 values.
    pub fn to_json(&self) -> Result<String, GridError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Number of stored rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The stored rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the cell at `(row, col)`, or `Empty` outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or_default()
    }

    /// Returns the cell at a signed offset from `at`, or `Empty` outside the grid.
    #[must_use]
    pub fn neighbor(&self, at: Coordinate, d_row: isize, d_col: isize) -> Cell {
        at.offset(d_row, d_col)
            .map_or(Cell::Empty, |c| self.cell(c.row, c.col))
    }

    /// Snapshot of the four edge-sharing neighbors of `at`.
    #[must_use]
    pub fn orthogonal_neighbors(&self, at: Coordinate) -> OrthogonalNeighbors {
        OrthogonalNeighbors {
            left: self.neighbor(at, 0, -1),
            right: self.neighbor(at, 0, 1),
            upper: self.neighbor(at, -1, 0),
            lower: self.neighbor(at, 1, 0),
        }
    }

    /// Snapshot of the four corner-sharing neighbors of `at`.
    #[must_use]
    pub fn diagonal_neighbors(&self, at: Coordinate) -> DiagonalNeighbors {
        DiagonalNeighbors {
            upper_left: self.neighbor(at, -1, -1),
            upper_right: self.neighbor(at, -1, 1),
            lower_left: self.neighbor(at, 1, -1),
            lower_right: self.neighbor(at, 1, 1),
        }
    }

    /// Sets the cell at `(row, col)` and returns the previous state.
    ///
    /// Returns `None` and leaves the grid untouched outside the stored cells.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Option<Cell> {
        let slot = self.rows.get_mut(row)?.get_mut(col)?;
        Some(std::mem::replace(slot, cell))
    }

    /// Iterates occupied cells in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_occupied())
                .map(move |(col, _)| Coordinate::new(row, col))
        })
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied_cells().count()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = GridError;

    fn try_from(raw: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        let rows = raw
            .into_iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .into_iter()
                    .enumerate()
                    .map(|(col, value)| {
                        Cell::from_raw(value).ok_or(GridError::InvalidCell { row, col, value })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }
}

impl From<Vec<Vec<bool>>> for Grid {
    fn from(raw: Vec<Vec<bool>>) -> Self {
        Self {
            rows: raw
                .into_iter()
                .map(|values| values.into_iter().map(Cell::from).collect())
                .collect(),
        }
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.rows
            .into_iter()
            .map(|cells| cells.into_iter().map(u8::from).collect())
            .collect()
    }
}
