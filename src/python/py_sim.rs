//! Simulation bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::LifeError;
use crate::sim::{Cadence, Simulation, TickResult};

fn to_py_err(err: LifeError) -> PyErr {
    match err {
        LifeError::OutOfRange { .. } => {
            PyErr::new::<pyo3::exceptions::PyIndexError, _>(err.to_string())
        }
        other => PyErr::new::<pyo3::exceptions::PyValueError, _>(other.to_string()),
    }
}

/// Python wrapper for TickResult.
#[pyclass(name = "TickResult")]
#[derive(Clone, Debug)]
pub struct PyTickResult(pub TickResult);

#[pymethods]
impl PyTickResult {
    #[getter]
    fn generation_count(&self) -> u64 {
        self.0.generation_count
    }

    #[getter]
    fn is_stable(&self) -> bool {
        self.0.is_stable
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "TickResult(generation_count={}, is_stable={})",
            self.0.generation_count, self.0.is_stable
        )
    }
}

/// Python wrapper for Simulation.
#[pyclass(name = "Simulation")]
pub struct PySimulation {
    inner: Simulation,
}

#[pymethods]
impl PySimulation {
    /// Create a randomly seeded simulation.
    ///
    /// # Arguments
    /// - rows, columns: grid dimensions (positive)
    /// - spawn_probability: chance each cell starts alive, in [0, 1]
    /// - seed: RNG seed; omit for a fresh random seed
    #[new]
    #[pyo3(signature = (rows = 20, columns = 20, spawn_probability = 0.5, seed = None))]
    fn new(rows: usize, columns: usize, spawn_probability: f64, seed: Option<u64>) -> PyResult<Self> {
        let inner = Simulation::initialize(rows, columns, spawn_probability, seed).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Advance one generation.
    fn tick(&mut self) -> PyTickResult {
        PyTickResult(self.inner.tick())
    }

    /// Whether the cell at (row, col) is alive. Raises IndexError outside the grid.
    fn cell_is_alive(&self, row: usize, col: usize) -> PyResult<bool> {
        self.inner.cell_is_alive(row, col).map_err(to_py_err)
    }

    /// Discard all state and reseed with new parameters.
    fn reset(&mut self, rows: usize, columns: usize, spawn_probability: f64) -> PyResult<()> {
        self.inner.reset(rows, columns, spawn_probability).map_err(to_py_err)
    }

    /// Reset with the current parameters.
    fn restart(&mut self) -> PyResult<()> {
        self.inner.restart().map_err(to_py_err)
    }

    #[getter]
    fn generation(&self) -> u64 {
        self.inner.generation()
    }

    #[getter]
    fn is_stable(&self) -> bool {
        self.inner.is_stable()
    }

    #[getter]
    fn dimensions(&self) -> (usize, usize) {
        self.inner.dimensions()
    }

    #[getter]
    fn seed(&self) -> Option<u64> {
        self.inner.seed()
    }

    /// Live cell coordinates in row-major order.
    fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.inner.grid().iter_alive().collect()
    }

    /// The grid as a (rows, columns) boolean numpy array.
    fn cells_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<bool>>> {
        let (rows, columns) = self.inner.dimensions();
        PyArray1::from_slice_bound(py, self.inner.grid().as_slice())
            .reshape([rows, columns])
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    fn __str__(&self) -> String {
        self.inner.grid().to_string()
    }

    fn __repr__(&self) -> String {
        let (rows, columns) = self.inner.dimensions();
        format!(
            "Simulation(rows={}, columns={}, generation={}, stable={})",
            rows,
            columns,
            self.inner.generation(),
            self.inner.is_stable()
        )
    }
}

/// Python wrapper for Cadence.
#[pyclass(name = "Cadence")]
#[derive(Clone, Debug)]
pub struct PyCadence(pub Cadence);

#[pymethods]
impl PyCadence {
    #[new]
    fn new() -> Self {
        Self(Cadence::new())
    }

    /// Interval between ticks in seconds.
    #[getter]
    fn interval_secs(&self) -> f64 {
        self.0.interval().as_secs_f64()
    }

    /// Speed up one step. Returns whether the interval changed.
    fn faster(&mut self) -> bool {
        self.0.faster()
    }

    /// Slow down one step. Returns whether the interval changed.
    fn slower(&mut self) -> bool {
        self.0.slower()
    }

    fn slider_value(&self) -> f64 {
        self.0.slider_value()
    }

    fn __repr__(&self) -> String {
        format!("Cadence(interval_secs={:.2})", self.interval_secs())
    }
}
