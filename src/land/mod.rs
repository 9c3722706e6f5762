pub mod components;
pub mod grid;

pub use components::{find_components, verify_labeling, FertileComponent};
pub use grid::{Cell, Grid, Neighbor};
