//! Dense fixed-size grid of cell states.

use std::fmt;

use crate::core::config::validate_dimensions;
use crate::core::{LifeError, LifeRng, Result};

/// Fixed-size 2D grid of live/dead cells.
///
/// Cells are stored row-major in a single `Vec<bool>`. Dimensions are fixed
/// at construction; equality compares every cell.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        validate_dimensions(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        })
    }

    /// Create a grid with each cell independently alive with `probability`.
    ///
    /// Draws one value per cell in row-major order, so the same RNG seed
    /// always yields the same grid.
    pub fn random(rows: usize, columns: usize, probability: f64, rng: &mut LifeRng) -> Result<Self> {
        crate::core::config::validate_probability(probability)?;
        let mut grid = Self::new(rows, columns)?;
        for cell in &mut grid.cells {
            *cell = rng.gen_bool(probability);
        }
        Ok(grid)
    }

    /// Create a grid with the listed `(row, col)` cells alive.
    pub fn from_cells(rows: usize, columns: usize, alive: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::new(rows, columns)?;
        for &(row, col) in alive {
            grid.set(row, col, true)?;
        }
        Ok(grid)
    }

    /// Parse a picture with one line per row: `#` or `O` is alive, `.` is dead.
    ///
    /// Surrounding whitespace and blank lines are ignored. All rows must
    /// have the same width.
    ///
    /// ```
    /// use rust_life::grid::Grid;
    ///
    /// let grid = Grid::from_ascii("
    ///     .#.
    ///     .#.
    ///     .#.
    /// ").unwrap();
    /// assert_eq!(grid.dimensions(), (3, 3));
    /// assert_eq!(grid.population(), 3);
    /// ```
    pub fn from_ascii(picture: &str) -> Result<Self> {
        let lines: Vec<&str> = picture
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let rows = lines.len();
        let columns = lines.first().map_or(0, |l| l.chars().count());
        let mut grid = Self::new(rows, columns)?;

        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != columns {
                return Err(LifeError::invalid_config(format!(
                    "row {row} has {} cells, expected {columns}",
                    line.chars().count()
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                let alive = match ch {
                    '#' | 'O' => true,
                    '.' => false,
                    other => {
                        return Err(LifeError::invalid_config(format!(
                            "unexpected character {other:?} at ({row}, {col})"
                        )))
                    }
                };
                grid.cells[row * columns + col] = alive;
            }
        }
        Ok(grid)
    }

    /// Grid dimensions as `(rows, columns)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Check whether a coordinate lies inside the grid.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    /// Get the state of a cell.
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.index_of(row, col).map(|i| self.cells[i])
    }

    /// Set the state of a cell.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let i = self.index_of(row, col)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Whether every cell is dead.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    /// Iterate over live cell coordinates in row-major order.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i / columns, i % columns))
    }

    /// Iterate over rows as slices.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.columns)
    }

    /// Row-major cell storage.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Mutable row-major cell storage. Length is fixed.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Unchecked read for coordinates already known to be in bounds.
    #[inline]
    pub(crate) fn alive_at(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.columns + col]
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if self.contains(row, col) {
            Ok(row * self.columns + col)
        } else {
            Err(LifeError::OutOfRange {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.columns)?;
        fmt::Display::fmt(self, f)
    }
}
