//! Local and global error analysis against the exact solution.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Float,
    cache::ValuesCache,
    convergence::observed_order,
    core::{grid::Grid, ode::Problem},
    error::{Error, Result},
    methods::Method,
    sweep::StepSweep,
};

/// How the pointwise errors of one swept run are summarized.
///
/// `Max` and `Sum` are not interchangeable: the maximum is the worst-case
/// local error and does not grow with the number of grid points, the sum does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reduction {
    /// Largest absolute difference over the grid.
    #[default]
    Max,
    /// Sum of absolute differences over the grid.
    Sum,
    /// Absolute difference at the last grid point.
    Final,
}

impl Reduction {
    /// Reduce a non-empty sequence of local errors to a scalar.
    ///
    /// A NaN local error makes the result NaN under every policy that reads it.
    pub fn reduce(&self, errors: &[Float]) -> Float {
        match self {
            Reduction::Max => errors.iter().copied().fold(0.0, |acc, e| {
                if acc.is_nan() || e.is_nan() {
                    Float::NAN
                } else {
                    acc.max(e)
                }
            }),
            Reduction::Sum => errors.iter().sum(),
            Reduction::Final => errors.last().copied().unwrap_or(0.0),
        }
    }
}

impl FromStr for Reduction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "maximum" => Ok(Reduction::Max),
            "sum" => Ok(Reduction::Sum),
            "final" | "last" => Ok(Reduction::Final),
            _ => Err(Error::UnknownReduction(s.to_string())),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Max => write!(f, "max"),
            Reduction::Sum => write!(f, "sum"),
            Reduction::Final => write!(f, "final"),
        }
    }
}

/// One reduced error per swept step size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalErrors {
    pub method: Method,
    pub reduction: Reduction,
    /// Swept step sizes
    pub steps: Vec<Float>,
    /// Reduced error for each entry of `steps`
    pub errors: Vec<Float>,
}

impl GlobalErrors {
    /// Iterate over (step, error) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.steps.iter().copied().zip(self.errors.iter().copied())
    }

    /// Least-squares slope of ln(error) against ln(step).
    pub fn observed_order(&self) -> Option<Float> {
        observed_order(&self.steps, &self.errors)
    }
}

/// Computes local and global errors of the approximate integrators.
///
/// Borrows the [`ValuesCache`] for the problem, the default grid and its
/// series; owns the step sweep and every alternate grid built from it.
pub struct ErrorAnalyzer<'a, P> {
    cache: &'a ValuesCache<P>,
    sweep: StepSweep,
    reduction: Reduction,
}

impl<'a, P: Problem> ErrorAnalyzer<'a, P> {
    /// Sweep and reduction are taken from the cache's parameters.
    pub fn new(cache: &'a ValuesCache<P>) -> Result<Self> {
        let params = cache.parameters();
        Ok(Self {
            cache,
            sweep: params.sweep()?,
            reduction: params.reduction,
        })
    }

    /// Use an explicit sweep and reduction.
    pub fn with_sweep(cache: &'a ValuesCache<P>, sweep: StepSweep, reduction: Reduction) -> Self {
        Self {
            cache,
            sweep,
            reduction,
        }
    }

    pub fn sweep(&self) -> &StepSweep {
        &self.sweep
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// |Solution[i] - Exact[i]| on the default grid, reusing cached series.
    pub fn local_errors(&self, method: Method) -> Result<Vec<Float>> {
        let exact = self.cache.get(Method::Exact)?;
        let sol = self.cache.get(method)?;
        Ok(sol.abs_diff(&exact))
    }

    /// Reduced error on a fresh grid with step `step`.
    pub fn global_error(&self, method: Method, step: Float) -> Result<Float> {
        let params = self.cache.parameters();
        let problem = self.cache.problem();

        let grid = Grid::new(params.x0, params.xf, step, params.grid_bound)?;
        let sol = method.solve(problem, &grid, params.y0)?;
        let exact = Method::Exact.solve(problem, &grid, params.y0)?;

        Ok(self.reduction.reduce(&sol.abs_diff(&exact)))
    }

    /// One reduced error per swept step size.
    ///
    /// The sweep stops at the first failing step size; the error names it.
    pub fn global_errors(&self, method: Method) -> Result<GlobalErrors> {
        log::info!(
            "global error sweep for {method}: {} step sizes, {} reduction",
            self.sweep.len(),
            self.reduction
        );

        let errors = self
            .sweep
            .iter()
            .map(|&step| {
                self.global_error(method, step).map_err(|e| Error::Sweep {
                    step,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<Float>>>()?;

        log::info!("global error sweep for {method} finished");

        Ok(GlobalErrors {
            method,
            reduction: self.reduction,
            steps: self.sweep.to_vec(),
            errors,
        })
    }
}
