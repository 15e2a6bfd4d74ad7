//! Assertions for check outcomes.

use crate::checkers::Check;
use crate::grid::Grid;

/// Asserts that the check accepts the grid.
pub fn assert_passes(check: &dyn Check, grid: &Grid) {
    if let Err(err) = check.validate(grid) {
        panic!("Expected {} check to pass, got: {}", check.name(), err);
    }
}

/// Asserts that the check rejects the grid with the given error code.
pub fn assert_fails_with_code(check: &dyn Check, grid: &Grid, code: &str) {
    match check.validate(grid) {
        Ok(()) => panic!("Expected {} check to fail with {}, but it passed", check.name(), code),
        Err(err) => assert_eq!(
            err.code(),
            code,
            "Expected {} check to fail with {}, got: {}",
            check.name(),
            code,
            err
        ),
    }
}
