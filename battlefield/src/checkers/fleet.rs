//! Fleet composition check.
//!
//! Ships are attributed by scanning a private copy of the board in
//! row-major order. The first cell of a ship met by the scan is always its
//! topmost or leftmost cell, so a ship only ever has to be measured
//! downwards or rightwards. Once measured, the rest of the ship is cleared
//! from the copy so no cell is counted twice.

use super::{Check, CheckKind};
use crate::config::{FleetRules, BOARD_SIZE, MAX_SHIP_LENGTH};
use crate::errors::{BattlefieldError, FleetError, FleetMismatch};
use crate::grid::{Cell, Coordinate, Grid};
use serde::Serialize;
use tracing::trace;

/// Number of ships found for each length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FleetTally {
    found: [usize; MAX_SHIP_LENGTH + 1],
}

impl FleetTally {
    /// Number of ships of `length` cells found.
    #[must_use]
    pub fn found(&self, length: usize) -> usize {
        self.found.get(length).copied().unwrap_or(0)
    }

    /// Total number of ships found.
    #[must_use]
    pub fn total_ships(&self) -> usize {
        self.found.iter().sum()
    }

    /// Lengths whose count differs from the rules, shortest first.
    #[must_use]
    pub fn mismatches(&self, rules: &FleetRules) -> Vec<FleetMismatch> {
        rules
            .lengths()
            .filter_map(|length| {
                let expected = rules.expected_count(length);
                let found = self.found(length);
                (expected != found).then_some(FleetMismatch {
                    length,
                    expected,
                    found,
                })
            })
            .collect()
    }

    fn record(&mut self, length: usize) {
        if let Some(count) = self.found.get_mut(length) {
            *count += 1;
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    const fn step(self) -> (isize, isize) {
        match self {
            Self::Vertical => (1, 0),
            Self::Horizontal => (0, 1),
        }
    }
}

/// A private `BOARD_SIZE` by `BOARD_SIZE` working copy of the board.
struct Arena {
    cells: Vec<Cell>,
}

impl Arena {
    fn copy_of(grid: &Grid) -> Self {
        let cells = (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| grid.cell(row, col)))
            .collect();
        Self { cells }
    }

    fn index(at: Coordinate) -> Option<usize> {
        (at.row < BOARD_SIZE && at.col < BOARD_SIZE).then_some(at.row * BOARD_SIZE + at.col)
    }

    fn get(&self, at: Coordinate) -> Cell {
        Self::index(at)
            .and_then(|i| self.cells.get(i))
            .copied()
            .unwrap_or_default()
    }

    fn cell_along(origin: Coordinate, axis: Axis, distance: usize) -> Option<Coordinate> {
        let (d_row, d_col) = axis.step();
        let distance = isize::try_from(distance).ok()?;
        origin.offset(d_row * distance, d_col * distance)
    }

    fn extends(&self, origin: Coordinate, axis: Axis, length: usize) -> bool {
        (1..length).all(|distance| {
            Self::cell_along(origin, axis, distance)
                .is_some_and(|at| self.get(at).is_occupied())
        })
    }

    fn clear_trailing(&mut self, origin: Coordinate, axis: Axis, length: usize) {
        for distance in 1..length {
            if let Some(i) = Self::cell_along(origin, axis, distance).and_then(Self::index) {
                self.cells[i] = Cell::Empty;
            }
        }
    }

    /// Measures the ship starting at `origin` and clears its trailing cells.
    ///
    /// Longer ships are tried first, and for each length the vertical axis
    /// before the horizontal one. Only the first matching axis is cleared.
    fn take_ship(&mut self, origin: Coordinate) -> usize {
        for length in (2..=MAX_SHIP_LENGTH).rev() {
            for axis in [Axis::Vertical, Axis::Horizontal] {
                if self.extends(origin, axis, length) {
                    self.clear_trailing(origin, axis, length);
                    trace!(row = origin.row, col = origin.col, length, ?axis, "ship attributed");
                    return length;
                }
            }
        }
        trace!(row = origin.row, col = origin.col, length = 1, "ship attributed");
        1
    }
}

/// Checks that the board holds exactly the fleet described by [`FleetRules`].
///
/// Assumes the shape and contact checks already passed; on boards that
/// violate them the counts are meaningless but the check never panics.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleetCounter {
    rules: FleetRules,
}

impl FleetCounter {
    /// Creates a fleet counter for the standard fleet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: FleetRules::new(),
        }
    }

    /// Counts the ships on the board without touching the caller's grid.
    #[must_use]
    pub fn count(&self, grid: &Grid) -> FleetTally {
        let mut arena = Arena::copy_of(grid);
        let mut tally = FleetTally::default();

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let origin = Coordinate::new(row, col);
                if arena.get(origin).is_occupied() {
                    tally.record(arena.take_ship(origin));
                }
            }
        }

        tally
    }
}

impl Check for FleetCounter {
    fn name(&self) -> &'static str {
        "fleet"
    }

    fn kind(&self) -> CheckKind {
        CheckKind::Fleet
    }

    fn validate(&self, grid: &Grid) -> Result<(), BattlefieldError> {
        let mismatches = self.count(grid).mismatches(&self.rules);
        if mismatches.is_empty() {
            Ok(())
        } else {
            Err(FleetError::WrongFleetComposition { mismatches }.into())
        }
    }
}
