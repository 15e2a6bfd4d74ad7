//! # Battlefield
//!
//! Validation of battleship fleet placements.
//!
//! A board is a 10x10 grid of empty and occupied cells. It is valid when:
//!
//! - **Shape**: it has exactly 10 rows of 10 cells
//! - **Contact**: every ship is a straight horizontal or vertical line and
//!   no two ships touch, not even by a corner
//! - **Fleet**: it holds one 4-cell ship, two 3-cell ships, three 2-cell
//!   ships and four 1-cell ships
//!
//! ## Quick Start
//!
//! ```rust
//! use battlefield::prelude::*;
//!
//! let grid = Grid::from_json("[[1, 0], [0, 0]]")?;
//! assert!(!validate_battlefield(&grid));
//!
//! let err = validate(&grid).unwrap_err();
//! assert_eq!(err.check(), Some(CheckKind::Shape));
//! # Ok::<(), battlefield::errors::GridError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod checkers;
pub mod config;
pub mod errors;
pub mod grid;
pub mod observability;
pub mod testing;
pub mod validator;


pub use validator::{validate, validate_battlefield, ValidationReport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::checkers::{
        Check, CheckKind, ContactChecker, FleetCounter, FleetTally, ShapeChecker,
    };
    pub use crate::config::{FleetRules, BOARD_SIZE, MAX_SHIP_LENGTH};
    pub use crate::errors::{
        BattlefieldError, ContactError, FleetError, FleetMismatch, GridError, ShapeError,
    };
    pub use crate::grid::{Cell, Coordinate, Grid};
    pub use crate::observability::{init_tracing, LogFormat};
    pub use crate::validator::{validate, validate_battlefield, ValidationReport};
}
