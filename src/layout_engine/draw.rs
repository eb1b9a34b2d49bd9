//! Text preview of a layout, one character per `p` x `p` cell.
//!
//! Each half of a tile covers a 2x2 block filled with its pip value, so a
//! horizontal tile is four cells wide and two tall. Empty cells are blank and
//! trailing blanks are trimmed from every row.

use super::placement::PiecePosition;
use super::table_layout::TableLayout;

pub fn draw_positions<'a>(positions: impl IntoIterator<Item = &'a PiecePosition>, p: f64) -> String {
    let halves = positions
        .into_iter()
        .flat_map(|pos| pos.halves(p))
        .collect::<Vec<_>>();
    let Some((_, first)) = halves.first() else {
        return String::new();
    };

    let (mut min_x, mut max_y) = (first.min.x, first.max.y);
    let (mut max_x, mut min_y) = (first.max.x, first.min.y);
    for (_, rect) in &halves {
        min_x = min_x.min(rect.min.x);
        max_x = max_x.max(rect.max.x);
        min_y = min_y.min(rect.min.y);
        max_y = max_y.max(rect.max.y);
    }

    let cells = |len: f64| (len / p).round() as usize;
    let mut grid = vec![vec![' '; cells(max_x - min_x)]; cells(max_y - min_y)];
    for (pip, rect) in &halves {
        let glyph = char::from(b'0' + pip);
        let col = cells(rect.min.x - min_x);
        let row = cells(max_y - rect.max.y);
        for line in grid.iter_mut().skip(row).take(cells(rect.height())) {
            for cell in line.iter_mut().skip(col).take(cells(rect.width())) {
                *cell = glyph;
            }
        }
    }

    grid.into_iter()
        .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn draw(layout: &TableLayout) -> String { draw_positions(&layout.positions, layout.p) }
