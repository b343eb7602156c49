//! Explicit (forward) Euler fixed-step integrator.

use crate::{
    Float,
    core::{grid::Grid, ode::ODE, solution::Solution},
    error::Result,
    methods::Method,
};

/// Explicit Euler: y[i] = y[i-1] + h * f(x[i-1], y[i-1]).
///
/// First order; local truncation error O(h^2), global error O(h).
pub fn euler<F>(f: &F, grid: &Grid, y0: Float) -> Result<Solution>
where
    F: ODE + ?Sized,
{
    let h = grid.step();
    let mut y = Vec::with_capacity(grid.len());
    y.push(y0);

    let mut nfev = 0;
    for i in 1..grid.len() {
        let yp = y[i - 1];
        let k1 = f.ode(grid[i - 1], yp)?;
        nfev += 1;
        y.push(yp + h * k1);
    }

    Ok(Solution::new(Method::Euler, y, nfev))
}
