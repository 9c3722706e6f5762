pub mod error;
pub mod types;

pub use error::{LandError, Result};
pub use types::{BarrenRectangle, Label, Location, GRID_COLS, GRID_ROWS};
