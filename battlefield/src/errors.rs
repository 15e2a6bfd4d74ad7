//! Error types for battlefield validation.
//!
//! Each check has its own error enum; [`BattlefieldError`] wraps them so the
//! validator can propagate whichever check failed first with `?`.

use crate::checkers::CheckKind;
use crate::grid::OrthogonalNeighbors;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for battlefield operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattlefieldError {
    /// The board does not have the required dimensions.
    #[error("{0}")]
    Shape(#[from] ShapeError),

    /// Ships are bent or touch each other.
    #[error("{0}")]
    Contact(#[from] ContactError),

    /// The board does not hold the expected fleet.
    #[error("{0}")]
    Fleet(#[from] FleetError),

    /// The grid could not be built from its raw representation.
    #[error("{0}")]
    Grid(#[from] GridError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BattlefieldError {
    /// Returns the stable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Shape(e) => e.code(),
            Self::Contact(e) => e.code(),
            Self::Fleet(e) => e.code(),
            Self::Grid(e) => e.code(),
            Self::Serialization(_) => "SERIALIZATION-001",
            Self::Internal(_) => "INTERNAL-001",
        }
    }

    /// Returns the check that raised this error, if any.
    #[must_use]
    pub fn check(&self) -> Option<CheckKind> {
        match self {
            Self::Shape(_) => Some(CheckKind::Shape),
            Self::Contact(_) => Some(CheckKind::Contact),
            Self::Fleet(_) => Some(CheckKind::Fleet),
            Self::Grid(_) | Self::Serialization(_) | Self::Internal(_) => None,
        }
    }
}

/// Error raised when the board has the wrong dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The number of rows is not the board size.
    #[error("Board has wrong rows count: expected {expected}, found {found}")]
    WrongRowCount {
        /// Required row count.
        expected: usize,
        /// Actual row count.
        found: usize,
    },

    /// A row does not have the board size number of columns.
    #[error("Row {row} has wrong columns count: expected {expected}, found {found}")]
    WrongColumnCount {
        /// Index of the offending row.
        row: usize,
        /// Required column count.
        expected: usize,
        /// Actual column count.
        found: usize,
    },
}

impl ShapeError {
    /// Returns the stable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::WrongRowCount { .. } => "SHAPE-001-ROWS",
            Self::WrongColumnCount { .. } => "SHAPE-002-COLUMNS",
        }
    }
}

/// Error raised when occupied cells do not form separated straight ships.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// The occupied neighbors of a cell are not on one axis.
    #[error("Ship construction is wrong at ({row}, {col}), cells are: {neighbors}")]
    BentShip {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// Orthogonal neighbor states around the cell.
        neighbors: OrthogonalNeighbors,
    },

    /// Two ships touch by a corner.
    #[error("Ship construction is wrong at ({row}, {col}), ships are in contact by diagonal")]
    DiagonalContact {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
    },
}

impl ContactError {
    /// Returns the stable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BentShip { .. } => "CONTACT-001-BENT",
            Self::DiagonalContact { .. } => "CONTACT-002-DIAGONAL",
        }
    }
}

/// A ship length whose count differs from the fleet rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetMismatch {
    /// Ship length in cells.
    pub length: usize,
    /// Number of ships the fleet requires.
    pub expected: usize,
    /// Number of ships found on the board.
    pub found: usize,
}

impl std::fmt::Display for FleetMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-cell ships expected {}, found {}",
            self.length, self.expected, self.found
        )
    }
}

fn join_mismatches(mismatches: &[FleetMismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error raised when the ships on the board are not the expected fleet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    /// At least one ship length has the wrong count.
    #[error("Ships are incorrect: {}", join_mismatches(.mismatches))]
    WrongFleetComposition {
        /// Every length whose count is off, shortest first.
        mismatches: Vec<FleetMismatch>,
    },
}

impl FleetError {
    /// Returns the stable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::WrongFleetComposition { .. } => "FLEET-001-COMPOSITION",
        }
    }
}

/// Error raised while building a grid from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A cell value other than 0 or 1.
    #[error("Invalid cell value {value} at ({row}, {col}), expected 0 or 1")]
    InvalidCell {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The rejected value.
        value: u8,
    },

    /// The JSON input could not be parsed.
    #[error("Invalid grid JSON: {0}")]
    Json(String),
}

impl GridError {
    /// Returns the stable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidCell { .. } => "GRID-001-CELL",
            Self::Json(_) => "GRID-002-JSON",
        }
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
