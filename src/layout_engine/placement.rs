//! Tile geometry: where a tile lands for a given direction and anchor, and
//! where the end's anchor moves to afterwards.
//!
//! Anchors follow one convention per direction. Growing left the anchor is the
//! top-right corner of the next tile, growing right or down it is the top-left
//! corner, and growing up it is the bottom-left corner.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::LayoutError;
use super::state::ensure_reachable;
use super::{Direction, End, Orientation};
use crate::common::geometry::{Coords, Rect};
use crate::model::tile::Tile;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PiecePosition {
    /// Pips in drawing order: left then right when horizontal, top then bottom
    /// when vertical.
    pub tile: Tile,
    pub orientation: Orientation,
    /// Top-left corner of the footprint.
    pub coords: Coords,
}

impl PiecePosition {
    pub fn footprint(&self, p: f64) -> Rect {
        match self.orientation {
            Orientation::Horizontal => Rect::from_top_left(self.coords, 4.0 * p, 2.0 * p),
            Orientation::Vertical => Rect::from_top_left(self.coords, 2.0 * p, 4.0 * p),
        }
    }

    /// The two square halves of the tile, each with the pip it shows.
    pub fn halves(&self, p: f64) -> [(u8, Rect); 2] {
        let second = match self.orientation {
            Orientation::Horizontal => self.coords.offset(2.0 * p, 0.0),
            Orientation::Vertical => self.coords.offset(0.0, -2.0 * p),
        };
        [
            (self.tile.first(), Rect::from_top_left(self.coords, 2.0 * p, 2.0 * p)),
            (self.tile.second(), Rect::from_top_left(second, 2.0 * p, 2.0 * p)),
        ]
    }
}

/// The pivot sits centred on the origin, doubles standing upright.
pub fn pivot_position(tile: Tile, p: f64) -> PiecePosition {
    if tile.is_double() {
        PiecePosition {
            tile,
            orientation: Orientation::Vertical,
            coords: Coords::new(-p, 2.0 * p),
        }
    } else {
        PiecePosition {
            tile,
            orientation: Orientation::Horizontal,
            coords: Coords::new(-2.0 * p, p),
        }
    }
}

/// Anchor for the next tile after `pos` when growing in `direction`.
pub fn end_from_position(pos: &PiecePosition, direction: Direction, p: f64) -> Coords {
    let c = pos.coords;
    match (pos.orientation, direction) {
        (Orientation::Vertical, Direction::Left) => c.offset(0.0, -p),
        (Orientation::Vertical, Direction::Right) => c.offset(2.0 * p, -p),
        (Orientation::Vertical, Direction::Up) => c,
        (Orientation::Vertical, Direction::Down) => c.offset(0.0, -4.0 * p),
        (Orientation::Horizontal, Direction::Left) => c,
        (Orientation::Horizontal, Direction::Right) => c.offset(4.0 * p, 0.0),
        (Orientation::Horizontal, Direction::Up) => c.offset(p, 0.0),
        (Orientation::Horizontal, Direction::Down) => c.offset(p, -2.0 * p),
    }
}

/// Turns `tile` so the pip matching `open_pip` sits at the joint, giving the
/// tile in left-to-right table order. Returns it with the pip it leaves open.
pub fn orient_for_end(end: End, open_pip: u8, tile: Tile) -> (Tile, u8) {
    let oriented = match end {
        End::Left if tile.second() == open_pip => tile,
        End::Left if tile.first() == open_pip => tile.reversed(),
        End::Right if tile.first() == open_pip => tile,
        End::Right if tile.second() == open_pip => tile.reversed(),
        _ => {
            warn!(%end, %tile, open_pip, "Tile does not match the open pip, keeping its pip order");
            tile
        }
    };
    let outer = match end {
        End::Left => oriented.first(),
        End::Right => oriented.second(),
    };
    (oriented, outer)
}

/// Lays `tile`, given in table order, at `anchor` while `end` grows in
/// `direction`.
///
/// Regular tiles are drawn reversed whenever the end runs against its initial
/// direction, so the pip at the joint faces its neighbour. Doubles are laid
/// across the run.
pub fn place(
    end: End,
    direction: Direction,
    tile: Tile,
    anchor: Coords,
    p: f64,
) -> Result<PiecePosition, LayoutError> {
    ensure_reachable(end, direction, "placing a tile")?;
    let a = anchor;
    let pos = if tile.is_double() {
        let (orientation, coords) = match direction {
            Direction::Left => (Orientation::Vertical, a.offset(-2.0 * p, p)),
            Direction::Right => (Orientation::Vertical, a.offset(0.0, p)),
            Direction::Down => (Orientation::Horizontal, a.offset(-p, 0.0)),
            Direction::Up => (Orientation::Horizontal, a.offset(-p, 2.0 * p)),
        };
        PiecePosition { tile, orientation, coords }
    } else {
        let tile = if direction == end.initial_direction() { tile } else { tile.reversed() };
        let (orientation, coords) = match direction {
            Direction::Left => (Orientation::Horizontal, a.offset(-4.0 * p, 0.0)),
            Direction::Right => (Orientation::Horizontal, a),
            Direction::Down => (Orientation::Vertical, a),
            Direction::Up => (Orientation::Vertical, a.offset(0.0, 4.0 * p)),
        };
        PiecePosition { tile, orientation, coords }
    };
    Ok(pos)
}

/// Anchor of `end` after it turns from `from` to `to`.
///
/// `last` is the tile most recently placed at that end, the pivot for an end's
/// first turn. Doubles stand across the run, so the anchor is taken from their
/// footprint instead of being shifted from the old anchor.
pub fn turn_anchor(
    end: End,
    from: Direction,
    to: Direction,
    anchor: Coords,
    last: &PiecePosition,
    p: f64,
) -> Result<Coords, LayoutError> {
    ensure_reachable(end, from, "turning")?;
    ensure_reachable(end, to, "turning")?;
    let (dx, dy) = match (from, to) {
        (Direction::Left, Direction::Down) => (-2.0 * p, 0.0),
        (Direction::Right, Direction::Down) => (0.0, 0.0),
        (Direction::Down, Direction::Left) => (2.0 * p, 0.0),
        (Direction::Down, Direction::Right) => (0.0, 0.0),
        (Direction::Left, Direction::Up) => (-2.0 * p, -2.0 * p),
        (Direction::Right, Direction::Up) => (0.0, -2.0 * p),
        (Direction::Up, Direction::Left) => (2.0 * p, 2.0 * p),
        (Direction::Up, Direction::Right) => (0.0, 2.0 * p),
        (_, to) => return Err(LayoutError::unreachable(end, to, "turning without changing axis")),
    };
    if last.tile.is_double() {
        Ok(end_from_position(last, to, p))
    } else {
        Ok(anchor.offset(dx, dy))
    }
}
