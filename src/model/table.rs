use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// The tiles on the table as the game reports them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TableSnapshot {
    /// Tiles from left to right, each in table order.
    #[serde(default)]
    pub table: Vec<Tile>,
    /// The tile played first, which anchors the layout.
    #[serde(default, alias = "firstPiece")]
    pub first_piece: Option<Tile>,
}

impl TableSnapshot {
    pub fn from_json(buf: &str) -> serde_json::Result<Self> { serde_json::from_str(buf) }
}

/// Index of the first tile in `table` that is `pivot`, in either pip order.
pub fn pivot_index(table: &[Tile], pivot: Tile) -> Option<usize> {
    table.iter().position(|tile| tile.same_piece(pivot))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn t(a: u8, b: u8) -> Tile { Tile::new(a, b).unwrap() }

    #[test]
    fn reads_game_json() {
        let snapshot = TableSnapshot::from_json(
            r#"{"table": [[1, 6], [6, 6], [6, 5]], "firstPiece": [6, 6], "state": "PLAYING"}"#,
        )
        .unwrap();
        assert_eq!(snapshot.table, vec![t(1, 6), t(6, 6), t(6, 5)]);
        assert_eq!(snapshot.first_piece, Some(t(6, 6)));
        assert_eq!(pivot_index(&snapshot.table, t(6, 6)), Some(1));
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = TableSnapshot::from_json(r#"{"table": [], "first_piece": null}"#).unwrap();
        assert_eq!(snapshot, TableSnapshot::default());
        assert_eq!(pivot_index(&snapshot.table, t(6, 6)), None);
    }

    #[test]
    fn pivot_matches_in_either_order() {
        let table = [t(0, 3), t(3, 5), t(5, 1), t(3, 5)];
        assert_eq!(pivot_index(&table, t(5, 3)), Some(1));
        assert_eq!(pivot_index(&table, t(1, 1)), None);
    }

    #[test]
    fn invalid_pips_are_rejected() {
        assert!(TableSnapshot::from_json(r#"{"table": [[7, 1]]}"#).is_err());
    }
}
