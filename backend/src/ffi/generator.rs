//! PyO3 wrapper for Generator
//!
//! Python callers pass plain `int`/`float`/`str` seeds and numeric limits,
//! so seeds and limits go through the same normalization as the Rust API.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::GeneratorConfig;
use crate::rng::{Generator, RngError, Seed};

/// Python wrapper for Rust Generator
///
/// # Example (from Python)
///
/// ```python
/// from caucus_rng_core_rs import Generator
///
/// rng = Generator(12345, 67890, diagnostics=True)
/// rolls = [rng.random_up_to(6) for _ in range(5)]  # [4, 4, 0, 4, 5]
/// print(rng.summarize())  # {6: {0: 1, 4: 3, 5: 1}}
/// ```
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: Generator,
}

#[pymethods]
impl PyGenerator {
    #[new]
    #[pyo3(signature = (seed_a=None, seed_b=None, diagnostics=false))]
    fn new(
        seed_a: Option<&Bound<'_, PyAny>>,
        seed_b: Option<&Bound<'_, PyAny>>,
        diagnostics: bool,
    ) -> Self {
        let config = if diagnostics {
            GeneratorConfig::diagnostic()
        } else {
            GeneratorConfig::default()
        };
        PyGenerator {
            inner: Generator::with_config(seed_from_py(seed_a), seed_from_py(seed_b), config),
        }
    }

    /// Uniform integer in `[0, limit)`; raises ValueError for invalid limits
    fn random_up_to(&mut self, limit: f64) -> PyResult<u64> {
        self.inner.random_up_to_value(limit).map_err(to_py_err)
    }

    fn random_real(&mut self) -> f64 {
        self.inner.random_real()
    }

    /// `+1` (heads) or `-1` (tails)
    fn coin_flip(&mut self) -> i32 {
        self.inner.coin_flip().sign()
    }

    /// `{limit: {result: count}}` over recorded draws
    fn summarize(&self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        let summary = PyDict::new_bound(py);
        for (limit, counts) in self.inner.summarize() {
            let per_result = PyDict::new_bound(py);
            for (result, count) in counts {
                per_result.set_item(result, count)?;
            }
            summary.set_item(limit, per_result)?;
        }
        Ok(summary.unbind())
    }
}

/// Convert a Python seed; anything unrecognized falls back to the default
fn seed_from_py(value: Option<&Bound<'_, PyAny>>) -> Seed {
    let Some(value) = value else {
        return Seed::Missing;
    };
    if value.is_none() {
        return Seed::Missing;
    }
    if let Ok(text) = value.extract::<String>() {
        return Seed::Text(text);
    }
    if let Ok(int) = value.extract::<u64>() {
        return Seed::Integer(int);
    }
    if let Ok(int) = value.extract::<i64>() {
        return Seed::Signed(int);
    }
    if let Ok(number) = value.extract::<f64>() {
        return Seed::Number(number);
    }
    Seed::Missing
}

fn to_py_err(err: RngError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
