//! Python bindings for the rust-life engine.
//!
//! A Python front end (pygame, matplotlib, a notebook) owns the timer and
//! the drawing; the engine only answers queries and advances on `tick()`.
//!
//! # Quick Start
//!
//! ```python
//! import rust_life as life
//!
//! sim = life.Simulation(rows=40, columns=60, spawn_probability=0.3, seed=42)
//! cadence = life.Cadence()
//!
//! while not sim.is_stable:
//!     result = sim.tick()
//!     print(result)            # "Generation: 17"
//!     cells = sim.cells_numpy()  # (40, 60) bool array for drawing
//!
//! if cadence.faster():
//!     sim.restart()
//! ```

use pyo3::prelude::*;

mod py_sim;

pub use py_sim::*;

/// rust-life: a bounded-grid Game of Life engine.
#[pymodule]
fn rust_life(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySimulation>()?;
    m.add_class::<PyTickResult>()?;
    m.add_class::<PyCadence>()?;

    Ok(())
}
