use serde::{Deserialize, Serialize};
use tracing::info_span;

use super::error::LayoutError;
use super::placement::PiecePosition;
use super::{End, LayoutEngine};
use crate::common::config::{BoardSettings, Config, DisplaySettings};
use crate::common::geometry::Coords;
use crate::model::table::{TableSnapshot, pivot_index};
use crate::model::tile::Tile;

/// Result of one layout pass over the whole table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TableLayout {
    /// Half of a tile's short edge, in px.
    pub p: f64,
    /// One entry per tile on the table, in table order.
    pub positions: Vec<PiecePosition>,
    pub vertical_extent_up: f64,
    pub vertical_extent_down: f64,
    pub left_hint: Option<Coords>,
    pub right_hint: Option<Coords>,
}

impl TableLayout {
    /// Layout of an empty table: nothing placed, extents at the display
    /// minimum.
    pub fn empty(board: &BoardSettings, display: &DisplaySettings) -> Self {
        TableLayout {
            p: board.piece_size / 2.0,
            positions: Vec::new(),
            vertical_extent_up: display.min_extent_up,
            vertical_extent_down: display.min_extent_down,
            left_hint: None,
            right_hint: None,
        }
    }

    pub fn from_engine(engine: LayoutEngine, display: &DisplaySettings) -> Result<Self, LayoutError> {
        Ok(TableLayout {
            p: engine.p(),
            vertical_extent_up: engine.vertical_extent_up().max(display.min_extent_up),
            vertical_extent_down: engine.vertical_extent_down().max(display.min_extent_down),
            left_hint: engine.left_hint_position()?,
            right_hint: engine.right_hint_position()?,
            positions: engine.into_positions(),
        })
    }
}

/// Replays `table` into a fresh engine, growing both ends outward from
/// `pivot`.
pub fn layout_engine_for(
    board: &BoardSettings,
    table: &[Tile],
    pivot: Tile,
) -> Result<LayoutEngine, LayoutError> {
    let idx = pivot_index(table, pivot).ok_or(LayoutError::Consistency { pivot })?;

    let mut engine = LayoutEngine::from_settings(board);
    engine.place_first(table[idx])?;
    for tile in &table[idx + 1..] {
        engine.extend(End::Right, *tile)?;
    }
    for tile in table[..idx].iter().rev() {
        engine.extend(End::Left, *tile)?;
    }
    Ok(engine)
}

pub fn compute_layout(
    config: &Config,
    table: &[Tile],
    pivot: Option<Tile>,
) -> Result<TableLayout, LayoutError> {
    let _span = info_span!("compute_layout", tiles = table.len()).entered();
    if table.is_empty() {
        return Ok(TableLayout::empty(&config.board, &config.display));
    }
    let pivot = pivot.ok_or(LayoutError::NoPivot)?;
    let engine = layout_engine_for(&config.board, table, pivot)?;
    TableLayout::from_engine(engine, &config.display)
}

impl TableSnapshot {
    pub fn layout(&self, config: &Config) -> Result<TableLayout, LayoutError> {
        compute_layout(config, &self.table, self.first_piece)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_log::test;

    use super::*;
    use crate::layout_engine::Orientation;

    fn t(a: u8, b: u8) -> Tile { Tile::new(a, b).unwrap() }

    fn config() -> Config { Config::default() }

    #[test]
    fn empty_table_uses_display_minimums() {
        let layout = compute_layout(&config(), &[], None).unwrap();
        assert_eq!(layout, TableLayout::empty(&config().board, &config().display));
        assert_eq!(layout.vertical_extent_up, 100.0);
        assert_eq!(layout.left_hint, None);
    }

    #[test]
    fn missing_pivot_is_a_consistency_error() {
        let err = compute_layout(&config(), &[t(6, 6), t(6, 5)], Some(t(1, 1))).unwrap_err();
        assert_eq!(err, LayoutError::Consistency { pivot: t(1, 1) });
        assert_eq!(err.to_string(), "Pivot [1|1] is not on the table");
    }

    #[test]
    fn table_without_first_piece_fails() {
        assert_eq!(
            compute_layout(&config(), &[t(6, 6)], None),
            Err(LayoutError::NoPivot)
        );
    }

    #[test]
    fn both_sides_of_the_pivot_are_laid_out_in_table_order() {
        let table = [t(2, 1), t(1, 6), t(6, 6), t(6, 5), t(5, 3)];
        let layout = compute_layout(&config(), &table, Some(t(6, 6))).unwrap();
        let tiles = layout.positions.iter().map(|pos| pos.tile).collect::<Vec<_>>();
        assert_eq!(tiles, table.to_vec());
        assert_eq!(layout.positions[2].orientation, Orientation::Vertical);
        assert_eq!(layout.positions[0].coords, Coords::new(-180.0, 20.0));
        assert_eq!(layout.positions[4].coords, Coords::new(100.0, 20.0));
        assert_eq!(layout.left_hint, Some(Coords::new(-220.0, 20.0)));
        assert_eq!(layout.right_hint, Some(Coords::new(180.0, 20.0)));
    }

    #[test]
    fn reversed_pivot_still_found() {
        let table = [t(4, 2), t(2, 5)];
        let layout = compute_layout(&config(), &table, Some(t(5, 2))).unwrap();
        assert_eq!(layout.positions[1].coords, Coords::new(-40.0, 20.0));
        assert_eq!(layout.positions[1].tile, t(2, 5));
        assert_eq!(layout.positions[0].coords, Coords::new(-120.0, 20.0));
    }

    #[test]
    fn extents_are_clamped_to_the_display_minimum() {
        let mut config = config();
        config.display.min_extent_up = 0.0;
        config.display.min_extent_down = 50.0;
        let layout = compute_layout(&config, &[t(3, 4)], Some(t(3, 4))).unwrap();
        assert_eq!(layout.vertical_extent_up, 40.0);
        assert_eq!(layout.vertical_extent_down, 50.0);
    }

    #[test]
    fn snapshot_layout() {
        let snapshot = TableSnapshot {
            table: vec![t(6, 6), t(6, 5)],
            first_piece: Some(t(6, 6)),
        };
        let layout = snapshot.layout(&config()).unwrap();
        assert_eq!(layout.positions.len(), 2);
        assert_eq!(layout.p, 20.0);
    }

    #[test]
    fn layout_serializes_for_the_renderer() {
        let layout = compute_layout(&config(), &[t(6, 6)], Some(t(6, 6))).unwrap();
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(
            json["positions"][0],
            serde_json::json!({
                "tile": [6, 6],
                "orientation": "vertical",
                "coords": { "x": -20.0, "y": 40.0 }
            })
        );
        assert_eq!(json["left_hint"], serde_json::json!({ "x": -60.0, "y": 20.0 }));
    }
}
