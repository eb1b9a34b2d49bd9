pub mod draw;
pub mod engine;
pub mod error;
pub(crate) mod graph;
pub mod placement;
pub mod state;
pub mod table_layout;

pub use draw::draw;
pub use engine::LayoutEngine;
pub use error::LayoutError;
pub use graph::{Direction, End, Orientation};
pub use placement::PiecePosition;
pub use state::EndState;
pub use table_layout::{TableLayout, compute_layout};
