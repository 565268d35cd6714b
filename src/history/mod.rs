//! Rolling history of past grids and stability detection.

pub mod window;

pub use window::{HistoryWindow, HISTORY_CAPACITY};
