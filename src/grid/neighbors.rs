//! Moore-neighborhood counting with hard edges.
//!
//! Cells outside the grid count as dead. The grid does not wrap.

use smallvec::SmallVec;

use super::store::Grid;

/// Offsets of the 8 surrounding cells, row-major.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// In-bounds neighbor coordinates of `(row, col)`.
///
/// Interior cells have 8, edge cells 5, corner cells 3.
pub fn neighbor_coords(
    rows: usize,
    columns: usize,
    row: usize,
    col: usize,
) -> SmallVec<[(usize, usize); 8]> {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < rows && c < columns).then_some((r, c))
        })
        .collect()
}

/// Count live neighbors of `(row, col)`. Always in `0..=8`.
///
/// # Panics
///
/// Panics if `(row, col)` is outside the grid.
pub fn count_live_neighbors(state: &Grid, row: usize, col: usize) -> u8 {
    let (rows, columns) = state.dimensions();
    assert!(state.contains(row, col), "({row}, {col}) outside grid");

    neighbor_coords(rows, columns, row, col)
        .into_iter()
        .filter(|&(r, c)| state.alive_at(r, c))
        .count() as u8
}
