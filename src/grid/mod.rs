//! Grid state and neighborhood queries.
//!
//! - `store`: the dense fixed-size [`Grid`]
//! - `neighbors`: live-neighbor counting with hard (non-wrapping) edges
//! - `pattern`: named starting configurations

pub mod store;
pub mod neighbors;
pub mod pattern;

pub use store::Grid;
pub use neighbors::{count_live_neighbors, neighbor_coords, NEIGHBOR_OFFSETS};
pub use pattern::Pattern;
