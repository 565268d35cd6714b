//! Simulation configuration.
//!
//! Configuration is resolved from:
//! 1. Hard-coded defaults (20x20 grid, 50% spawn chance, entropy seed)
//! 2. An optional TOML document (overrides defaults)
//!
//! ## Example
//!
//! ```toml
//! rows = 40
//! columns = 60
//! spawn_probability = 0.3
//! seed = 1234
//! ```

use serde::{Deserialize, Serialize};

use super::error::{LifeError, Result};

/// Parameters used to build and seed a grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of grid rows (must be positive).
    pub rows: usize,

    /// Number of grid columns (must be positive).
    pub columns: usize,

    /// Probability in `[0, 1]` that a cell starts alive.
    pub spawn_probability: f64,

    /// RNG seed. `None` draws a fresh seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            columns: 20,
            spawn_probability: 0.5,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a config with the given grid dimensions and defaults elsewhere.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Set the spawn probability.
    #[must_use]
    pub fn with_spawn_probability(mut self, probability: f64) -> Self {
        self.spawn_probability = probability;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check dimensions and spawn probability.
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.rows, self.columns)?;
        validate_probability(self.spawn_probability)
    }

    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn validate_dimensions(rows: usize, columns: usize) -> Result<()> {
    if rows == 0 || columns == 0 {
        return Err(LifeError::invalid_config(format!(
            "grid dimensions must be positive, got {rows}x{columns}"
        )));
    }
    if rows.checked_mul(columns).is_none() {
        return Err(LifeError::invalid_config(format!(
            "grid of {rows}x{columns} cells is too large"
        )));
    }
    Ok(())
}

pub(crate) fn validate_probability(probability: f64) -> Result<()> {
    // NaN fails the range check too.
    if !(0.0..=1.0).contains(&probability) {
        return Err(LifeError::invalid_config(format!(
            "spawn probability must be in [0, 1], got {probability}"
        )));
    }
    Ok(())
}
