//! The board checks.
//!
//! Three checks run against every board, always in the order given by
//! [`CheckKind::PIPELINE`]; later checks rely on what earlier checks proved:
//! - [`ShapeChecker`]: the board is `BOARD_SIZE` by `BOARD_SIZE`
//! - [`ContactChecker`]: ships are straight and never touch
//! - [`FleetCounter`]: the ships form exactly the expected fleet

mod contact;
mod fleet;
mod shape;

pub use contact::ContactChecker;
pub use fleet::{FleetCounter, FleetTally};
pub use shape::ShapeChecker;

use crate::errors::BattlefieldError;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for board checks.
///
/// A check either accepts the grid or explains the first problem it found.
pub trait Check: Send + Sync + Debug {
    /// Returns the name of the check.
    fn name(&self) -> &'static str;

    /// Returns which check this is.
    fn kind(&self) -> CheckKind;

    /// Validates the grid.
    ///
    /// Implementations never modify the caller's grid.
    fn validate(&self, grid: &Grid) -> Result<(), BattlefieldError>;
}

/// The closed set of board checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Board dimensions.
    Shape,
    /// Straight ships without contact.
    Contact,
    /// Fleet composition.
    Fleet,
}

impl CheckKind {
    /// The fixed order in which checks run.
    pub const PIPELINE: [Self; 3] = [Self::Shape, Self::Contact, Self::Fleet];

    /// Runs the check of this kind against the grid.
    pub fn run(self, grid: &Grid) -> Result<(), BattlefieldError> {
        match self {
            Self::Shape => ShapeChecker::new().validate(grid),
            Self::Contact => ContactChecker::new().validate(grid),
            Self::Fleet => FleetCounter::new().validate(grid),
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape => write!(f, "shape"),
            Self::Contact => write!(f, "contact"),
            Self::Fleet => write!(f, "fleet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_kind_display() {
        assert_eq!(CheckKind::Shape.to_string(), "shape");
        assert_eq!(CheckKind::Contact.to_string(), "contact");
        assert_eq!(CheckKind::Fleet.to_string(), "fleet");
    }

    #[test]
    fn test_pipeline_order() {
        assert_eq!(
            CheckKind::PIPELINE,
            [CheckKind::Shape, CheckKind::Contact, CheckKind::Fleet]
        );
    }

    #[test]
    fn test_checkers_report_their_kind() {
        assert_eq!(ShapeChecker::new().kind(), CheckKind::Shape);
        assert_eq!(ContactChecker::new().kind(), CheckKind::Contact);
        assert_eq!(FleetCounter::new().kind(), CheckKind::Fleet);
        assert_eq!(FleetCounter::new().name(), "fleet");
    }

    #[test]
    fn test_check_kind_serialize() {
        let json = serde_json::to_string(&CheckKind::Contact).unwrap();
        assert_eq!(json, r#""contact""#);

        let kind: CheckKind = serde_json::from_str(r#""fleet""#).unwrap();
        assert_eq!(kind, CheckKind::Fleet);
    }

    #[test]
    fn test_run_dispatches() {
        let grid = Grid::empty(3);
        let err = CheckKind::Shape.run(&grid).unwrap_err();
        assert_eq!(err.check(), Some(CheckKind::Shape));
        assert!(CheckKind::Contact.run(&grid).is_ok());
    }
}
