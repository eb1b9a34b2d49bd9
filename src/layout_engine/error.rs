use thiserror::Error;

use super::{Direction, End};
use crate::model::tile::{Tile, TileError};

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Unrecognized placement {placement:?}, expected \"left\" or \"right\"")]
    Configuration { placement: String },
    #[error("Pivot {pivot} is not on the table")]
    Consistency { pivot: Tile },
    #[error("The {end} end reached direction {direction} while {context}")]
    InvariantViolation {
        end: End,
        direction: Direction,
        context: &'static str,
    },
    #[error("No pivot tile has been placed")]
    NoPivot,
    #[error("The pivot tile is already placed")]
    PivotAlreadyPlaced,
    #[error("Invalid tile: {0}")]
    Tile(#[from] TileError),
}

impl LayoutError {
    pub(crate) fn unreachable(end: End, direction: Direction, context: &'static str) -> Self {
        LayoutError::InvariantViolation { end, direction, context }
    }
}
