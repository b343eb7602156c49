//! Fixed-step solution procedures and method selection.

mod euler;
mod exact;
mod improved_euler;
mod rk4;

pub use euler::euler;
pub use exact::exact;
pub use improved_euler::improved_euler;
pub use rk4::rk4;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Float,
    core::{grid::Grid, ode::Problem, solution::Solution},
    error::{Error, Result},
};

/// Solution-producing procedures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Closed-form solution sampled on the grid
    Exact,
    /// Explicit Euler, order 1
    Euler,
    /// Improved Euler (Heun), order 2
    ImprovedEuler,
    /// Classic Runge-Kutta, order 4
    #[serde(rename = "runge_kutta")]
    RungeKutta4,
}

impl Method {
    /// Every method, exact solution first.
    pub const ALL: [Method; 4] = [
        Method::Exact,
        Method::Euler,
        Method::ImprovedEuler,
        Method::RungeKutta4,
    ];

    /// The three approximate integrators.
    pub const APPROXIMATE: [Method; 3] = [Method::Euler, Method::ImprovedEuler, Method::RungeKutta4];

    /// Order of accuracy of the global error; `None` for the exact solution.
    pub fn order(&self) -> Option<u32> {
        match self {
            Method::Exact => None,
            Method::Euler => Some(1),
            Method::ImprovedEuler => Some(2),
            Method::RungeKutta4 => Some(4),
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Method::Exact)
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Method::Exact => "Exact solution",
            Method::Euler => "Euler method",
            Method::ImprovedEuler => "Improved Euler method",
            Method::RungeKutta4 => "Runge-Kutta method",
        }
    }

    /// Compute this method's series on `grid`. `y0` is ignored by [`Method::Exact`].
    pub fn solve<P>(&self, problem: &P, grid: &Grid, y0: Float) -> Result<Solution>
    where
        P: Problem + ?Sized,
    {
        match self {
            Method::Exact => exact(problem, grid),
            Method::Euler => euler(problem, grid, y0),
            Method::ImprovedEuler => improved_euler(problem, grid, y0),
            Method::RungeKutta4 => rk4(problem, grid, y0),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Exact => "exact",
            Method::Euler => "euler",
            Method::ImprovedEuler => "improved_euler",
            Method::RungeKutta4 => "runge_kutta",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "exact" => Ok(Method::Exact),
            "euler" => Ok(Method::Euler),
            "improved_euler" | "heun" => Ok(Method::ImprovedEuler),
            "runge_kutta" | "rk4" => Ok(Method::RungeKutta4),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}
