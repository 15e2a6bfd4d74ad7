//! Cell state enum.

use std::fmt;

/// The state of a single board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// No ship part in this cell.
    #[default]
    Empty,
    /// A ship part occupies this cell.
    Occupied,
}

impl Cell {
    /// Converts a raw 0/1 value, returning `None` for anything else.
    #[must_use]
    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Empty),
            1 => Some(Self::Occupied),
            _ => None,
        }
    }

    /// Returns true if a ship part occupies the cell.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Self::Occupied)
    }

    /// Returns the raw 0/1 value of the cell.
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Occupied => 1,
        }
    }
}

impl From<bool> for Cell {
    fn from(occupied: bool) -> Self {
        if occupied {
            Self::Occupied
        } else {
            Self::Empty
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.as_raw()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_raw())
    }
}
