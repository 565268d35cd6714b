//! The B3/S23 generation update.
//!
//! Every new cell state is computed from the untouched previous grid:
//! updates are simultaneous, never in-place.

use crate::core::{LifeError, Result};
use crate::grid::{count_live_neighbors, Grid};

/// Next state of a single cell given its state and live-neighbor count.
///
/// ```
/// use rust_life::rules::next_cell_state;
///
/// assert!(next_cell_state(false, 3));  // birth
/// assert!(next_cell_state(true, 2));   // survival
/// assert!(!next_cell_state(true, 4));  // overpopulation
/// assert!(!next_cell_state(true, 1));  // underpopulation
/// ```
#[inline]
#[must_use]
pub fn next_cell_state(alive: bool, neighbors: u8) -> bool {
    if alive && (neighbors < 2 || neighbors > 3) {
        false
    } else if !alive && neighbors == 3 {
        true
    } else {
        alive
    }
}

/// Compute the next generation into a fresh grid.
#[must_use]
pub fn step(state: &Grid) -> Grid {
    let mut next = state.clone();
    fill_next(state, &mut next);
    next
}

/// Compute the next generation into `scratch`, which must match `state`'s
/// dimensions. `state` is left untouched.
pub fn step_into(state: &Grid, scratch: &mut Grid) -> Result<()> {
    if state.dimensions() != scratch.dimensions() {
        let (rows, columns) = state.dimensions();
        let (s_rows, s_columns) = scratch.dimensions();
        return Err(LifeError::invalid_config(format!(
            "scratch grid is {s_rows}x{s_columns}, expected {rows}x{columns}"
        )));
    }
    fill_next(state, scratch);
    Ok(())
}

/// Infallible core of `step_into` for callers that own matching buffers.
pub(crate) fn fill_next(state: &Grid, next: &mut Grid) {
    debug_assert_eq!(state.dimensions(), next.dimensions());
    let columns = state.columns();
    for (i, cell) in next.as_mut_slice().iter_mut().enumerate() {
        let (row, col) = (i / columns, i % columns);
        let neighbors = count_live_neighbors(state, row, col);
        *cell = next_cell_state(state.alive_at(row, col), neighbors);
    }
}
