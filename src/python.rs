//! Python bindings for the assignment problem.
//!
//! Every function takes the configuration as keyword arguments with the same
//! names and defaults as [`Parameters`] and returns numpy arrays.

use numpy::PyArray1;
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::{
    Float, HomogeneousODE,
    analysis::ErrorAnalyzer,
    cache::ValuesCache,
    error::Error,
    methods::Method,
    settings::Parameters,
};

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

type Array<'py> = Bound<'py, PyArray1<Float>>;

#[allow(clippy::too_many_arguments)]
fn parameters(
    x0: Float,
    xf: Float,
    h: Float,
    y0: Float,
    err0: Float,
    errf: Float,
    n_err_steps: usize,
    err_step: Option<Float>,
    err_mode: &str,
    reduction: &str,
    grid_bound: &str,
) -> PyResult<Parameters> {
    Ok(Parameters::builder()
        .x0(x0)
        .xf(xf)
        .h(h)
        .y0(y0)
        .err0(err0)
        .errf(errf)
        .n_err_steps(n_err_steps)
        .maybe_err_step(err_step)
        .err_mode(err_mode.parse()?)
        .reduction(reduction.parse()?)
        .grid_bound(grid_bound.parse()?)
        .build())
}

/// Default grid and the four solution series.
///
/// Returns `(x, exact, euler, improved_euler, runge_kutta)`.
#[pyfunction]
#[pyo3(signature = (x0=1.0, xf=2.3, h=0.1, y0=1.0, grid_bound="inclusive"))]
fn values<'py>(
    py: Python<'py>,
    x0: Float,
    xf: Float,
    h: Float,
    y0: Float,
    grid_bound: &str,
) -> PyResult<(Array<'py>, Array<'py>, Array<'py>, Array<'py>, Array<'py>)> {
    let params = Parameters::builder()
        .x0(x0)
        .xf(xf)
        .h(h)
        .y0(y0)
        .grid_bound(grid_bound.parse()?)
        .build();
    let cache = ValuesCache::new(HomogeneousODE, params)?;
    let v = cache.values()?;

    Ok((
        PyArray1::from_slice(py, cache.grid().points()),
        PyArray1::from_slice(py, v.exact.values()),
        PyArray1::from_slice(py, v.euler.values()),
        PyArray1::from_slice(py, v.improved_euler.values()),
        PyArray1::from_slice(py, v.runge_kutta.values()),
    ))
}

/// Pointwise |method - exact| on the default grid.
#[pyfunction]
#[pyo3(signature = (method, x0=1.0, xf=2.3, h=0.1, y0=1.0, grid_bound="inclusive"))]
fn local_errors<'py>(
    py: Python<'py>,
    method: &str,
    x0: Float,
    xf: Float,
    h: Float,
    y0: Float,
    grid_bound: &str,
) -> PyResult<Array<'py>> {
    let method: Method = method.parse()?;
    let params = Parameters::builder()
        .x0(x0)
        .xf(xf)
        .h(h)
        .y0(y0)
        .grid_bound(grid_bound.parse()?)
        .build();
    let cache = ValuesCache::new(HomogeneousODE, params)?;
    let analyzer = ErrorAnalyzer::new(&cache)?;

    Ok(PyArray1::from_vec(py, analyzer.local_errors(method)?))
}

/// Reduced error for every swept step size. Returns `(steps, errors)`.
#[pyfunction]
#[pyo3(signature = (
    method,
    x0=1.0,
    xf=2.3,
    h=0.1,
    y0=1.0,
    err0=0.1,
    errf=0.01,
    n_err_steps=5,
    err_step=None,
    err_mode="linspace",
    reduction="max",
    grid_bound="inclusive"
))]
#[allow(clippy::too_many_arguments)]
fn global_errors<'py>(
    py: Python<'py>,
    method: &str,
    x0: Float,
    xf: Float,
    h: Float,
    y0: Float,
    err0: Float,
    errf: Float,
    n_err_steps: usize,
    err_step: Option<Float>,
    err_mode: &str,
    reduction: &str,
    grid_bound: &str,
) -> PyResult<(Array<'py>, Array<'py>)> {
    let method: Method = method.parse()?;
    let params = parameters(
        x0, xf, h, y0, err0, errf, n_err_steps, err_step, err_mode, reduction, grid_bound,
    )?;
    let cache = ValuesCache::new(HomogeneousODE, params)?;
    let analyzer = ErrorAnalyzer::new(&cache)?;
    let global = analyzer.global_errors(method)?;

    Ok((
        PyArray1::from_vec(py, global.steps),
        PyArray1::from_vec(py, global.errors),
    ))
}

#[pymodule]
fn ivp_errors(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(values, m)?)?;
    m.add_function(wrap_pyfunction!(local_errors, m)?)?;
    m.add_function(wrap_pyfunction!(global_errors, m)?)?;
    Ok(())
}
