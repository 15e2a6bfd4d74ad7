//! Board representation.
//!
//! This module contains the types the checks operate on:
//! - Cell states
//! - The (possibly ragged) grid supplied by the caller
//! - Coordinates and neighbor snapshots

mod board;
mod cell;
mod coordinate;

pub use board::Grid;
pub use cell::Cell;
pub use coordinate::{Coordinate, DiagonalNeighbors, OrthogonalNeighbors};
