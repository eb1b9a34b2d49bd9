//! Per-end direction state machine.
//!
//! Each growth end is an [`EndState`] value. The functions here decide, from
//! that value alone, whether the end keeps its direction and where it turns
//! to. They never compute tile geometry, which lives in
//! [`placement`](super::placement).

use serde::{Deserialize, Serialize};

use super::error::LayoutError;
use super::{Direction, End, Orientation};
use crate::common::geometry::Coords;

/// Horizontal limits of the board, along with `p`, half of a tile's short
/// edge. All layout arithmetic is expressed in multiples of `p`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub p: f64,
}

impl Bounds {
    pub fn new(width: f64, piece_size: f64) -> Self {
        Bounds {
            left: -width / 2.0,
            right: width / 2.0,
            p: piece_size / 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndState {
    pub direction: Direction,
    /// Attachment point of the next tile at this end.
    pub anchor: Coords,
    /// Pip the next tile at this end has to show at the joint.
    pub open_pip: u8,
    /// Edge of the last completed row, written only when this end turns from
    /// horizontal to vertical. For the left end it is the lower bound, for the
    /// right end the upper bound.
    pub row_boundary: Option<f64>,
}

impl EndState {
    pub fn new(direction: Direction, anchor: Coords, open_pip: u8) -> Self {
        EndState {
            direction,
            anchor,
            open_pip,
            row_boundary: None,
        }
    }

    /// State after turning to `target` with the anchor moved to `anchor`.
    pub fn turned(self, target: Direction, anchor: Coords, p: f64) -> EndState {
        let row_boundary = match (self.direction.orientation(), target) {
            (Orientation::Horizontal, Direction::Down) => Some(self.anchor.y - 3.0 * p),
            (Orientation::Horizontal, Direction::Up) => Some(self.anchor.y + p),
            _ => self.row_boundary,
        };
        EndState {
            direction: target,
            anchor,
            open_pip: self.open_pip,
            row_boundary,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Lay the tile in the current direction.
    Continue,
    /// Lay the tile in the current direction, then turn.
    PlaceThenTurn,
    /// Turn first and lay the tile in the new direction.
    TurnThenPlace,
}

pub fn ensure_reachable(
    end: End,
    direction: Direction,
    context: &'static str,
) -> Result<(), LayoutError> {
    if end.can_head(direction) {
        Ok(())
    } else {
        Err(LayoutError::unreachable(end, direction, context))
    }
}

/// Whether `end` may take one more tile without turning.
///
/// Horizontal runs keep `7p` of room: `4p` for another tile and `3p` for the
/// vertical stub that may follow it. Vertical runs keep going while the new
/// row would sit closer than `2p` to the last completed one, and never turn
/// right after a double.
pub fn keeps_going(
    end: End,
    state: &EndState,
    bounds: &Bounds,
    last_was_double: bool,
) -> Result<bool, LayoutError> {
    let p = bounds.p;
    let anchor = state.anchor;
    let gap = match (end, state.direction) {
        (_, Direction::Left) => return Ok(anchor.x - 7.0 * p >= bounds.left),
        (_, Direction::Right) => return Ok(anchor.x + 7.0 * p <= bounds.right),
        (End::Left, Direction::Down) => recorded_boundary(end, state)? - (anchor.y + p),
        (End::Right, Direction::Up) => anchor.y - p - recorded_boundary(end, state)?,
        (end, direction) => {
            return Err(LayoutError::unreachable(end, direction, "checking for room"));
        }
    };
    Ok(gap < 2.0 * p || last_was_double)
}

fn recorded_boundary(end: End, state: &EndState) -> Result<f64, LayoutError> {
    state
        .row_boundary
        .ok_or_else(|| LayoutError::unreachable(end, state.direction, "no row boundary was recorded"))
}

pub fn plan(keeps_going: bool, incoming_double: bool) -> Step {
    if keeps_going {
        Step::Continue
    } else if incoming_double {
        // doubles lie across the run and need less room than a regular tile
        Step::PlaceThenTurn
    } else {
        Step::TurnThenPlace
    }
}

/// Direction `end` turns to from its current state.
///
/// Horizontal runs wrap into the end's vertical direction. Vertical runs turn
/// back toward the far side of the board.
pub fn turn_target(end: End, state: &EndState) -> Result<Direction, LayoutError> {
    match (end, state.direction) {
        (_, Direction::Left | Direction::Right) => Ok(end.vertical()),
        (End::Left, Direction::Down) | (End::Right, Direction::Up) => {
            if state.anchor.x > 0.0 {
                Ok(Direction::Left)
            } else {
                Ok(Direction::Right)
            }
        }
        (end, direction) => Err(LayoutError::unreachable(end, direction, "turning")),
    }
}
