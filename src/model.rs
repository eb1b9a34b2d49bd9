pub mod table;
pub mod tile;

pub use table::TableSnapshot;
pub use tile::{Tile, TileError};
