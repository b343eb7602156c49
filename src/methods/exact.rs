//! Exact solution sampled on a grid.

use crate::{
    Float,
    core::{grid::Grid, ode::ExactSolution, solution::Solution},
    error::Result,
    methods::Method,
};

/// Evaluate the closed-form solution at every grid point.
///
/// No recurrence is involved; points are still visited in order so the first
/// failing abscissa is the one reported.
pub fn exact<E>(e: &E, grid: &Grid) -> Result<Solution>
where
    E: ExactSolution + ?Sized,
{
    let y = grid
        .iter()
        .map(|&x| e.exact(x))
        .collect::<Result<Vec<Float>>>()?;
    let nfev = y.len();
    Ok(Solution::new(Method::Exact, y, nfev))
}
