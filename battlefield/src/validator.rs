//! Board validation entry points.
//!
//! The checks in [`CheckKind::PIPELINE`] run in order and the first
//! failure stops the run. [`validate_battlefield`] reduces the outcome to a
//! boolean and logs the reason at debug level; [`validate`] and
//! [`ValidationReport`] hand the reason back to the caller instead.

use crate::checkers::CheckKind;
use crate::errors::BattlefieldError;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Runs every check against the grid and returns the first failure.
pub fn validate(grid: &Grid) -> Result<(), BattlefieldError> {
    for kind in CheckKind::PIPELINE {
        kind.run(grid)?;
    }
    Ok(())
}

/// Returns true if the grid holds a complete, legally placed fleet.
///
/// The caller's grid is never modified, so repeated calls on the same grid
/// give the same answer.
pub fn validate_battlefield(grid: &Grid) -> bool {
    match validate(grid) {
        Ok(()) => true,
        Err(err) => {
            let check = err.check().map(|kind| kind.to_string()).unwrap_or_default();
            debug!(check = %check, code = err.code(), "{}", err);
            false
        }
    }
}

/// Serializable outcome of a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether every check passed.
    pub passed: bool,
    /// The check that rejected the board.
    pub failed_check: Option<CheckKind>,
    /// Error code of the failure.
    pub code: Option<String>,
    /// Human-readable failure reason.
    pub message: Option<String>,
}

impl ValidationReport {
    /// Validates the grid and records the outcome.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        Self::from_result(&validate(grid))
    }

    /// Builds a report from the outcome of [`validate`].
    #[must_use]
    pub fn from_result(result: &Result<(), BattlefieldError>) -> Self {
        match result {
            Ok(()) => Self {
                passed: true,
                failed_check: None,
                code: None,
                message: None,
            },
            Err(err) => Self {
                passed: false,
                failed_check: err.check(),
                code: Some(err.code().to_string()),
                message: Some(err.to_string()),
            },
        }
    }

    /// Serializes the report as JSON.
    pub fn to_json(&self) -> Result<String, BattlefieldError> {
        serde_json::to_string(self).map_err(|e| BattlefieldError::Serialization(e.to_string()))
    }
}
