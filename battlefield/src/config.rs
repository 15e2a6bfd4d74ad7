//! Board dimensions and the fleet rule table.
//!
//! The board size and fleet composition are fixed for the classic game.
//! Nothing here is read from the environment; the only runtime knob the
//! crate honours is the log filter (see [`crate::observability`]).

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 10;

/// Length of the longest ship in the fleet.
pub const MAX_SHIP_LENGTH: usize = 4;

/// The fixed ship-length to expected-count table.
///
/// A fleet holds one 4-cell ship, two 3-cell ships, three 2-cell ships
/// and four 1-cell ships, i.e. `count = 5 - length`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetRules;

impl FleetRules {
    /// Creates the standard fleet rules.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns how many ships of `length` cells the fleet requires.
    ///
    /// Lengths outside `1..=MAX_SHIP_LENGTH` are never expected.
    #[must_use]
    pub const fn expected_count(&self, length: usize) -> usize {
        if length == 0 || length > MAX_SHIP_LENGTH {
            0
        } else {
            MAX_SHIP_LENGTH + 1 - length
        }
    }

    /// Iterates the ship lengths the fleet is made of, shortest first.
    pub fn lengths(&self) -> impl Iterator<Item = usize> {
        1..=MAX_SHIP_LENGTH
    }

    /// Total number of ships in a complete fleet.
    #[must_use]
    pub fn total_ships(&self) -> usize {
        self.lengths().map(|len| self.expected_count(len)).sum()
    }

    /// Total number of occupied cells in a complete fleet.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.lengths().map(|len| len * self.expected_count(len)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_counts() {
        let rules = FleetRules::new();
        assert_eq!(rules.expected_count(1), 4);
        assert_eq!(rules.expected_count(2), 3);
        assert_eq!(rules.expected_count(3), 2);
        assert_eq!(rules.expected_count(4), 1);
    }

    #[test]
    fn test_out_of_range_lengths() {
        let rules = FleetRules::new();
        assert_eq!(rules.expected_count(0), 0);
        assert_eq!(rules.expected_count(5), 0);
    }

    #[test]
    fn test_fleet_totals() {
        let rules = FleetRules::default();
        assert_eq!(rules.total_ships(), 10);
        assert_eq!(rules.total_cells(), 20);
        assert_eq!(rules.lengths().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
