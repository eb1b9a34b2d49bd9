use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest pip value on a double-six set.
pub const MAX_PIP: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("pip value {0} is out of range 0..=6")]
    PipOutOfRange(u8),
}

/// A domino tile. The pip order is the order in which the tile is read: left
/// to right on the table, or top to bottom for a vertical rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct Tile([u8; 2]);

impl Tile {
    pub fn new(first: u8, second: u8) -> Result<Self, TileError> {
        for pip in [first, second] {
            if pip > MAX_PIP {
                return Err(TileError::PipOutOfRange(pip));
            }
        }
        Ok(Tile([first, second]))
    }

    pub fn first(self) -> u8 { self.0[0] }

    pub fn second(self) -> u8 { self.0[1] }

    pub fn pips(self) -> [u8; 2] { self.0 }

    pub fn is_double(self) -> bool { self.0[0] == self.0[1] }

    pub fn reversed(self) -> Self { Tile([self.0[1], self.0[0]]) }

    /// Same physical piece, regardless of how it is turned.
    pub fn same_piece(self, other: Tile) -> bool { self == other || self == other.reversed() }
}

impl TryFrom<[u8; 2]> for Tile {
    type Error = TileError;

    fn try_from([first, second]: [u8; 2]) -> Result<Self, Self::Error> { Tile::new(first, second) }
}

impl From<Tile> for [u8; 2] {
    fn from(tile: Tile) -> Self { tile.0 }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_pips_above_six() {
        assert_eq!(Tile::new(7, 1), Err(TileError::PipOutOfRange(7)));
        assert_eq!(Tile::new(1, 9), Err(TileError::PipOutOfRange(9)));
        assert!(Tile::new(0, 6).is_ok());
    }

    #[test]
    fn doubles_and_reversal() {
        let tile = Tile::new(6, 1).unwrap();
        assert!(!tile.is_double());
        assert_eq!(tile.reversed().pips(), [1, 6]);
        assert!(Tile::new(3, 3).unwrap().is_double());
    }

    #[test]
    fn same_piece_ignores_pip_order() {
        let a = Tile::new(2, 5).unwrap();
        assert!(a.same_piece(Tile::new(5, 2).unwrap()));
        assert!(a.same_piece(a));
        assert!(!a.same_piece(Tile::new(2, 4).unwrap()));
    }

    #[test]
    fn serializes_as_pip_array() {
        let tile = Tile::new(4, 2).unwrap();
        assert_eq!(serde_json::to_string(&tile).unwrap(), "[4,2]");
        assert_eq!(serde_json::from_str::<Tile>("[0,6]").unwrap(), Tile::new(0, 6).unwrap());
        assert!(serde_json::from_str::<Tile>("[0,8]").is_err());
    }

    #[test]
    fn displays_both_halves() {
        assert_eq!(Tile::new(6, 6).unwrap().to_string(), "[6|6]");
    }
}
