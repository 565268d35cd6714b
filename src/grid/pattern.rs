//! Well-known starting configurations.

use std::fmt;

use crate::core::{LifeError, Result};

use super::store::Grid;

/// A named Life pattern, given as live-cell offsets from its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Block,
    Beehive,
    Blinker,
    Toad,
    Beacon,
    Glider,
}

impl Pattern {
    /// Every pattern, for iteration in tests and pickers.
    pub const ALL: [Pattern; 6] = [
        Pattern::Block,
        Pattern::Beehive,
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Beacon,
        Pattern::Glider,
    ];

    /// Live cells relative to the pattern's top-left corner.
    #[must_use]
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Pattern::Beehive => &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
            Pattern::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Pattern::Toad => &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
            Pattern::Beacon => &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
            Pattern::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        }
    }

    /// Oscillation period in free space: 1 for still lifes, `None` for
    /// patterns that travel.
    #[must_use]
    pub fn period(self) -> Option<u32> {
        match self {
            Pattern::Block | Pattern::Beehive => Some(1),
            Pattern::Blinker | Pattern::Toad | Pattern::Beacon => Some(2),
            Pattern::Glider => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Block => "Block",
            Pattern::Beehive => "Beehive",
            Pattern::Blinker => "Blinker",
            Pattern::Toad => "Toad",
            Pattern::Beacon => "Beacon",
            Pattern::Glider => "Glider",
        }
    }

    /// Set this pattern's cells alive with its top-left corner at `(row, col)`.
    ///
    /// Fails with `OutOfRange` if any cell would land outside the grid; the
    /// grid may then be partially written.
    pub fn place(self, grid: &mut Grid, row: usize, col: usize) -> Result<()> {
        for &(dr, dc) in self.cells() {
            let (r, c) = row
                .checked_add(dr)
                .zip(col.checked_add(dc))
                .ok_or(LifeError::OutOfRange {
                    row,
                    col,
                    rows: grid.rows(),
                    columns: grid.columns(),
                })?;
            grid.set(r, c, true)?;
        }
        Ok(())
    }

    /// A fresh grid holding only this pattern at `(row, col)`.
    pub fn on_grid(self, rows: usize, columns: usize, row: usize, col: usize) -> Result<Grid> {
        let mut grid = Grid::new(rows, columns)?;
        self.place(&mut grid, row, col)?;
        Ok(grid)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_block() {
        let grid = Pattern::Block.on_grid(4, 4, 1, 1).unwrap();
        assert_eq!(
            grid.iter_alive().collect::<Vec<_>>(),
            vec![(1, 1), (1, 2), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(Pattern::Beacon.place(&mut grid, 0, 0).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_place_anchor_at_usize_max() {
        let mut grid = Grid::new(3, 3).unwrap();
        let err = Pattern::Glider.place(&mut grid, usize::MAX, 0).unwrap_err();
        assert!(err.is_out_of_range());
        let err = Pattern::Block.place(&mut grid, 0, usize::MAX).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_populations() {
        for pattern in Pattern::ALL {
            let grid = pattern.on_grid(8, 8, 2, 2).unwrap();
            assert_eq!(grid.population(), pattern.cells().len(), "{pattern}");
        }
    }

    #[test]
    fn test_periods() {
        assert_eq!(Pattern::Block.period(), Some(1));
        assert_eq!(Pattern::Toad.period(), Some(2));
        assert_eq!(Pattern::Glider.period(), None);
    }
}
