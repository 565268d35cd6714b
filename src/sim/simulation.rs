//! The simulation object presentation layers drive.

use std::fmt;

use tracing::{debug, info};

use crate::core::{LifeRng, Result, SimulationConfig};
use crate::grid::Grid;
use crate::history::HistoryWindow;
use crate::rules::engine::fill_next;

/// Outcome of one [`Simulation::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickResult {
    /// Generation count after this tick.
    pub generation_count: u64,
    /// Whether a repeated state has been detected (latched).
    pub is_stable: bool,
}

impl fmt::Display for TickResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generation: {}", self.generation_count)?;
        if self.is_stable {
            f.write_str(" (stable)")?;
        }
        Ok(())
    }
}

/// A running Game of Life.
///
/// Owns the current grid, a scratch grid for double buffering, the history
/// window, the generation counter and the stability latch. Once the latch
/// is set, `tick` no longer changes anything.
///
/// ```
/// use rust_life::grid::Pattern;
/// use rust_life::sim::Simulation;
///
/// let grid = Pattern::Block.on_grid(6, 6, 2, 2).unwrap();
/// let mut sim = Simulation::from_grid(grid);
///
/// assert!(!sim.tick().is_stable);
/// let result = sim.tick();
/// assert!(result.is_stable);
/// assert_eq!(result.generation_count, 2);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    /// Seed the current grid was drawn from; `None` for explicit grids.
    seed: Option<u64>,
    grid: Grid,
    scratch: Grid,
    history: HistoryWindow,
    generation: u64,
    stable: bool,
}

impl Simulation {
    /// Build a randomly seeded simulation.
    ///
    /// Each cell starts alive with `spawn_probability`. Passing the same
    /// `seed` reproduces the same starting grid.
    pub fn initialize(
        rows: usize,
        columns: usize,
        spawn_probability: f64,
        seed: Option<u64>,
    ) -> Result<Self> {
        let config = SimulationConfig {
            rows,
            columns,
            spawn_probability,
            seed,
        };
        Self::from_config(&config)
    }

    /// Build a randomly seeded simulation from a config.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => LifeRng::new(seed),
            None => LifeRng::from_entropy(),
        };
        let grid = Grid::random(config.rows, config.columns, config.spawn_probability, &mut rng)?;

        info!(
            rows = config.rows,
            columns = config.columns,
            spawn_probability = config.spawn_probability,
            seed = rng.seed(),
            population = grid.population(),
            "simulation initialized"
        );

        let mut sim = Self::from_grid(grid);
        sim.config = config.clone();
        sim.seed = Some(rng.seed());
        Ok(sim)
    }

    /// Start from an explicit grid.
    ///
    /// `restart` on such a simulation draws a random grid of the same size
    /// with the default spawn probability and an entropy seed.
    pub fn from_grid(grid: Grid) -> Self {
        let (rows, columns) = grid.dimensions();
        Self {
            config: SimulationConfig::new(rows, columns),
            seed: None,
            scratch: grid.clone(),
            grid,
            history: HistoryWindow::new(),
            generation: 0,
            stable: false,
        }
    }

    /// Advance one generation.
    ///
    /// The state entering the tick is checked against the history window and
    /// then recorded, and the next generation is committed. The tick that
    /// detects stability still counts and still commits; later ticks return
    /// the latched result without touching the grid.
    pub fn tick(&mut self) -> TickResult {
        if self.stable {
            return self.status();
        }

        self.generation += 1;

        fill_next(&self.grid, &mut self.scratch);
        self.stable = self.history.record_and_check_stable(&self.grid);
        std::mem::swap(&mut self.grid, &mut self.scratch);

        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "tick"
        );
        if self.stable {
            info!(generation = self.generation, "stable configuration detected");
        }

        self.status()
    }

    /// Tick until stable or until `max_ticks` ticks have run.
    pub fn run_until_stable(&mut self, max_ticks: u64) -> TickResult {
        for _ in 0..max_ticks {
            if self.tick().is_stable {
                break;
            }
        }
        self.status()
    }

    /// Discard all state and reseed with new parameters.
    ///
    /// Uses the originally configured seed, so a seeded simulation restarts
    /// from the same grid for the same parameters. On error the simulation
    /// is left unchanged.
    pub fn reset(&mut self, rows: usize, columns: usize, spawn_probability: f64) -> Result<()> {
        let config = SimulationConfig {
            rows,
            columns,
            spawn_probability,
            seed: self.config.seed,
        };
        *self = Self::from_config(&config)?;
        info!(rows, columns, "simulation reset");
        Ok(())
    }

    /// Reset with the current parameters, e.g. after a cadence change.
    pub fn restart(&mut self) -> Result<()> {
        let SimulationConfig {
            rows,
            columns,
            spawn_probability,
            ..
        } = self.config;
        self.reset(rows, columns, spawn_probability)
    }

    /// Read-only cell query for renderers.
    pub fn cell_is_alive(&self, row: usize, col: usize) -> Result<bool> {
        self.grid.get(row, col)
    }

    /// Generation count and stability latch, without ticking.
    #[must_use]
    pub fn status(&self) -> TickResult {
        TickResult {
            generation_count: self.generation,
            is_stable: self.stable,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Number of grids currently held for cycle detection.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Seed the current grid was drawn from, including one drawn from
    /// entropy. `None` when started from an explicit grid.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
