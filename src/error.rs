//! Errors raised while reading boards and checking paths

use thiserror::Error;

use crate::Point;

/// Structural problems in a board description
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Board dimensions are missing; expected `<rows> <cols>` at the start")]
    MissingDimension,

    #[error("Board dimension `{token}` is not a non-negative integer")]
    InvalidDimension { token: String },

    #[error("Board must have at least one row and one column, got {rows}x{cols}")]
    EmptyDimension { rows: usize, cols: usize },

    #[error("Expected {expected} cell descriptors, found {found}")]
    CellCountMismatch { expected: usize, found: usize },

    #[error("Cell descriptor `{token}` at y={y}, x={x} has no separator")]
    MissingSeparator { token: String, y: usize, x: usize },

    #[error("Invalid direction in cell descriptor `{token}` at y={y}, x={x}")]
    InvalidDirection { token: String, y: usize, x: usize },

    #[error("Bullseye `{token}` found at y={y}, x={x}; it may only be the last cell")]
    MisplacedBullseye { token: String, y: usize, x: usize },
}

/// Reasons why a path is not a legal walk on a board
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("Path is empty")]
    Empty,

    #[error("Path starts at {0}, not at the top-left corner")]
    WrongStart(Point),

    #[error("Path ends at {found}, not at the bullseye {bullseye}")]
    WrongEnd { found: Point, bullseye: Point },

    #[error("Step {from} -> {to} is not a move on the board")]
    IllegalStep { from: Point, to: Point },
}

/// Problems in a serialized displacement string
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DisplacementError {
    #[error("Displacement `{0}` has no magnitude")]
    MissingMagnitude(String),

    #[error("Displacement `{0}` has an unknown direction")]
    InvalidDirection(String),

    #[error("Displacement `{token}` leaves the board from {from}")]
    OutOfBounds { token: String, from: Point },
}

/// Compass code other than `N`, `S`, `E`, `W`, `NE`, `NW`, `SE` or `SW`
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown direction `{0}`")]
pub struct UnknownDirection(pub String);
