//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use crate::{
    Float,
    core::{grid::Grid, ode::ODE, solution::Solution},
    error::Result,
    methods::Method,
};

/// Classical explicit Runge-Kutta 4 (RK4) fixed-step integrator.
///
/// Each step depends on the previous one; the stages are evaluated in order
/// and the first domain error aborts the integration.
pub fn rk4<F>(f: &F, grid: &Grid, y0: Float) -> Result<Solution>
where
    F: ODE + ?Sized,
{
    let h = grid.step();
    let mut y = Vec::with_capacity(grid.len());
    y.push(y0);

    let mut nfev = 0;
    for i in 1..grid.len() {
        let x = grid[i - 1];
        let yp = y[i - 1];

        // Stage computations
        let k1 = f.ode(x, yp)?;
        let k2 = f.ode(x + C2 * h, yp + h * A21 * k1)?;
        let k3 = f.ode(x + C3 * h, yp + h * A32 * k2)?;
        let k4 = f.ode(x + C4 * h, yp + h * A43 * k3)?;
        nfev += 4;

        y.push(yp + h * (B1 * k1 + B2 * k2 + B3 * k3 + B4 * k4));
    }

    Ok(Solution::new(Method::RungeKutta4, y, nfev))
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
