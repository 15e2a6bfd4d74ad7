//! Testing utilities for battlefield checks.
//!
//! This module provides:
//! - Board fixtures, including a complete legal fleet
//! - Assertions for check outcomes

mod assertions;
mod fixtures;

pub use assertions::{assert_fails_with_code, assert_passes};
pub use fixtures::{
    board_with, empty_board, ragged_board, valid_fleet, VALID_FLEET_DESTROYER, VALID_FLEET_SHIPS,
};
