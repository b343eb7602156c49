//! Improved Euler (Heun) predictor-corrector integrator.

use crate::{
    Float,
    core::{grid::Grid, ode::ODE, solution::Solution},
    error::Result,
    methods::Method,
};

/// Improved Euler (Heun's method), second order.
///
/// Predicts with an Euler step, then averages the slopes at both ends:
/// y* = y + h*f(x, y), y_next = y + h*(f(x, y) + f(x_next, y*))/2.
pub fn improved_euler<F>(f: &F, grid: &Grid, y0: Float) -> Result<Solution>
where
    F: ODE + ?Sized,
{
    let h = grid.step();
    let mut y = Vec::with_capacity(grid.len());
    y.push(y0);

    let mut nfev = 0;
    for i in 1..grid.len() {
        let yp = y[i - 1];

        // Predictor
        let k1 = f.ode(grid[i - 1], yp)?;
        let ystar = yp + h * k1;

        // Corrector
        let k2 = f.ode(grid[i], ystar)?;
        nfev += 2;

        y.push(yp + h * (k1 + k2) / 2.0);
    }

    Ok(Solution::new(Method::ImprovedEuler, y, nfev))
}
