#![allow(dead_code)]

use ivp_errors::prelude::*;

/// x0 = 1, xf = 2.3, h = 0.1, y0 = 1 with a five point linspace sweep.
pub fn default_params() -> Parameters {
    Parameters::builder()
        .x0(1.0)
        .xf(2.3)
        .h(0.1)
        .y0(1.0)
        .err0(0.1)
        .errf(0.01)
        .n_err_steps(5)
        .build()
}

pub fn default_cache() -> ValuesCache<HomogeneousODE> {
    ValuesCache::new(HomogeneousODE, default_params()).unwrap()
}

pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() < tol, "expected {b}, got {a} (tol {tol})");
}
