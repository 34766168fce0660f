//! Drop position resolution and drag session state for reorderable card grids.
//!
//! ```rust
//! use egui_dnd_grid::{CardSize, DragDropItem, DragSession, DropOutcome, Grid, Side};
//!
//! let mut grid = Grid::new();
//! for (idx, name) in ["otter", "heron", "lynx"].into_iter().enumerate() {
//!     grid.add(CardSize::Small, name, idx);
//! }
//! let otter = grid.cards()[0].id();
//! let lynx = grid.cards()[2].id();
//!
//! let mut session = DragSession::new();
//! session.start(otter).unwrap();
//! session.hover(lynx, Side::After).unwrap();
//!
//! if let DropOutcome::Reorder(reorder) = session.drop(grid.cards()).unwrap() {
//!     grid.apply(&reorder).unwrap();
//! }
//! let names: Vec<_> = grid.cards().iter().map(|card| card.name.as_str()).collect();
//! assert_eq!(names, ["heron", "lynx", "otter"]);
//! ```

pub use config::GridConfig;
pub use grid::{Card, CardId, CardIdGenerator, CardSize, Grid, GridError};
pub use resolve::{resolve_drop_index, Side};
pub use state::{DragDropItem, DragError, DragSession, DragState, DropOutcome, Reorder};

mod config;
mod grid;
mod resolve;
mod state;
pub mod utils;
