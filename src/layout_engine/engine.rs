use std::collections::VecDeque;

use tracing::{debug, trace};

use super::error::LayoutError;
use super::placement::{self, PiecePosition};
use super::state::{self, Bounds, EndState, Step};
use super::{Direction, End, Orientation};
use crate::common::config::BoardSettings;
use crate::common::geometry::Coords;
use crate::model::tile::Tile;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Ends {
    left: EndState,
    right: EndState,
}

impl Ends {
    fn get(&self, end: End) -> EndState {
        match end {
            End::Left => self.left,
            End::Right => self.right,
        }
    }

    fn set(&mut self, end: End, state: EndState) {
        match end {
            End::Left => self.left = state,
            End::Right => self.right = state,
        }
    }
}

/// Lays a chain of tiles out as a snake on a board of fixed width.
///
/// The engine is built for a single layout pass: place the pivot, extend each
/// end outward in table order, read the results and drop it.
#[derive(Clone, Debug)]
pub struct LayoutEngine {
    bounds: Bounds,
    positions: VecDeque<PiecePosition>,
    ends: Option<Ends>,
}

impl LayoutEngine {
    /// `width` is the board width and `piece_size` the short edge of a tile,
    /// both in pixels. The long edge is assumed to be twice the short one.
    pub fn new(width: f64, piece_size: f64) -> Self {
        LayoutEngine {
            bounds: Bounds::new(width, piece_size),
            positions: VecDeque::new(),
            ends: None,
        }
    }

    pub fn from_settings(board: &BoardSettings) -> Self { Self::new(board.width, board.piece_size) }

    pub fn p(&self) -> f64 { self.bounds.p }

    pub fn left_bound(&self) -> f64 { self.bounds.left }

    pub fn right_bound(&self) -> f64 { self.bounds.right }

    /// Places `tile` as the pivot if the chain is empty, otherwise extends the
    /// end named by `placement`, which must be `"left"` or `"right"`.
    ///
    /// Once the pivot is down, a `None` placement is a
    /// [`LayoutError::Configuration`] with an empty placement string.
    pub fn add(&mut self, tile: Tile, placement: Option<&str>) -> Result<(), LayoutError> {
        if self.positions.is_empty() {
            return self.place_first(tile);
        }
        let end = placement.unwrap_or_default().parse::<End>()?;
        self.extend(end, tile)
    }

    pub fn place_first(&mut self, tile: Tile) -> Result<(), LayoutError> {
        if self.ends.is_some() {
            return Err(LayoutError::PivotAlreadyPlaced);
        }
        let p = self.p();
        let pos = placement::pivot_position(tile, p);
        let ends = Ends {
            left: EndState::new(
                Direction::Left,
                placement::end_from_position(&pos, Direction::Left, p),
                tile.first(),
            ),
            right: EndState::new(
                Direction::Right,
                placement::end_from_position(&pos, Direction::Right, p),
                tile.second(),
            ),
        };
        trace!(%tile, coords = ?pos.coords, "Placed pivot");
        self.positions.push_back(pos);
        self.ends = Some(ends);
        Ok(())
    }

    /// Adds `tile` at `end`. Nothing changes when an error is returned.
    pub fn extend(&mut self, end: End, tile: Tile) -> Result<(), LayoutError> {
        let mut ends = self.ends.ok_or(LayoutError::NoPivot)?;
        let last = self.last_at(end).ok_or(LayoutError::NoPivot)?;
        let current = ends.get(end);
        let (tile, open_pip) = placement::orient_for_end(end, current.open_pip, tile);

        let keeps_going = state::keeps_going(end, &current, &self.bounds, last.tile.is_double())?;
        let (pos, next) = match state::plan(keeps_going, tile.is_double()) {
            Step::Continue => self.put(end, current, tile)?,
            Step::PlaceThenTurn => {
                let (pos, placed) = self.put(end, current, tile)?;
                (pos, self.turn(end, placed, &pos)?)
            }
            Step::TurnThenPlace => {
                let turned = self.turn(end, current, &last)?;
                self.put(end, turned, tile)?
            }
        };

        ends.set(end, EndState { open_pip, ..next });
        self.ends = Some(ends);
        match end {
            End::Left => self.positions.push_front(pos),
            End::Right => self.positions.push_back(pos),
        }
        Ok(())
    }

    fn put(
        &self,
        end: End,
        state: EndState,
        tile: Tile,
    ) -> Result<(PiecePosition, EndState), LayoutError> {
        let p = self.p();
        let pos = placement::place(end, state.direction, tile, state.anchor, p)?;
        let anchor = placement::end_from_position(&pos, state.direction, p);
        trace!(%end, direction = %state.direction, tile = %pos.tile, coords = ?pos.coords, "Placed tile");
        Ok((pos, EndState { anchor, ..state }))
    }

    fn turn(
        &self,
        end: End,
        state: EndState,
        last: &PiecePosition,
    ) -> Result<EndState, LayoutError> {
        let p = self.p();
        let target = state::turn_target(end, &state)?;
        let anchor = placement::turn_anchor(end, state.direction, target, state.anchor, last, p)?;
        let turned = state.turned(target, anchor, p);
        debug!(
            %end,
            from = %state.direction,
            to = %target,
            anchor = ?turned.anchor,
            row_boundary = ?turned.row_boundary,
            "Turned"
        );
        Ok(turned)
    }

    fn last_at(&self, end: End) -> Option<PiecePosition> {
        match end {
            End::Left => self.positions.front().copied(),
            End::Right => self.positions.back().copied(),
        }
    }

    pub fn len(&self) -> usize { self.positions.len() }

    pub fn is_empty(&self) -> bool { self.positions.is_empty() }

    /// Placed tiles in table order, left to right.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = &PiecePosition> + '_ {
        self.positions.iter()
    }

    pub fn into_positions(self) -> Vec<PiecePosition> { self.positions.into() }

    pub fn end_state(&self, end: End) -> Option<EndState> { self.ends.map(|ends| ends.get(end)) }

    pub fn last_complete_row_lower_bound(&self) -> Option<f64> {
        self.end_state(End::Left).and_then(|state| state.row_boundary)
    }

    pub fn last_complete_row_upper_bound(&self) -> Option<f64> {
        self.end_state(End::Right).and_then(|state| state.row_boundary)
    }

    /// How far the layout reaches above the pivot row, read from the tile at
    /// the right end.
    pub fn vertical_extent_up(&self) -> f64 {
        let Some(right) = self.positions.back() else {
            return 0.0;
        };
        let top = match right.orientation {
            Orientation::Vertical => right.coords.y,
            Orientation::Horizontal => right.coords.y + self.p(),
        };
        top.max(0.0)
    }

    /// How far the layout reaches below the pivot row, read from the tile at
    /// the left end.
    pub fn vertical_extent_down(&self) -> f64 {
        let Some(left) = self.positions.front() else {
            return 0.0;
        };
        let bottom = match left.orientation {
            Orientation::Vertical => left.coords.y - 4.0 * self.p(),
            Orientation::Horizontal => left.coords.y - 3.0 * self.p(),
        };
        (-bottom).max(0.0)
    }

    pub fn left_hint_position(&self) -> Result<Option<Coords>, LayoutError> {
        self.hint_position(End::Left)
    }

    pub fn right_hint_position(&self) -> Result<Option<Coords>, LayoutError> {
        self.hint_position(End::Right)
    }

    /// Where a tile played at `end` would show up. `None` until the pivot is
    /// placed.
    pub fn hint_position(&self, end: End) -> Result<Option<Coords>, LayoutError> {
        let Some(state) = self.end_state(end) else {
            return Ok(None);
        };
        let p = self.p();
        let a = state.anchor;
        let hint = match (end, state.direction) {
            (_, Direction::Left) => a.offset(-2.0 * p, 0.0),
            (_, Direction::Right) => a,
            (End::Left, Direction::Down) => a,
            (End::Right, Direction::Up) => a.offset(0.0, 2.0 * p),
            (end, direction) => {
                return Err(LayoutError::unreachable(end, direction, "computing a hint"));
            }
        };
        Ok(Some(hint))
    }
}
