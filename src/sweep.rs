//! Step-size sweeps for global error analysis.

use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Float,
    core::grid::{GridBound, point_count},
    error::{Error, Result},
    settings::Parameters,
};

/// How the sweep's step sizes are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrMode {
    /// Exactly `n_err_steps` evenly spaced values, both bounds included.
    #[default]
    Linspace,
    /// err0, err0 ± err_step, ... up to and including errf.
    #[serde(alias = "arange")]
    Arithmetic,
}

impl FromStr for ErrMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linspace" => Ok(ErrMode::Linspace),
            "arithmetic" | "arange" => Ok(ErrMode::Arithmetic),
            _ => Err(Error::UnknownErrMode(s.to_string())),
        }
    }
}

impl fmt::Display for ErrMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrMode::Linspace => write!(f, "linspace"),
            ErrMode::Arithmetic => write!(f, "arithmetic"),
        }
    }
}

/// Ordered, strictly positive step sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepSweep {
    steps: Vec<Float>,
}

fn check_bound(v: Float) -> Result<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(Error::InvalidSweepBound(v));
    }
    Ok(())
}

impl StepSweep {
    /// `n` evenly spaced values from `err0` to `errf`, both included.
    ///
    /// The bounds may be given in either order; `n = 1` yields `[err0]`.
    pub fn linspace(err0: Float, errf: Float, n: usize) -> Result<Self> {
        check_bound(err0)?;
        check_bound(errf)?;
        if n == 0 {
            return Err(Error::InvalidSweepCount(n));
        }

        let steps = if n == 1 {
            vec![err0]
        } else {
            let delta = (errf - err0) / (n - 1) as Float;
            let mut steps: Vec<Float> = (0..n).map(|i| err0 + i as Float * delta).collect();
            steps[n - 1] = errf;
            steps
        };

        Ok(Self { steps })
    }

    /// Arithmetic sequence from `err0` towards `errf` with increment `step`.
    ///
    /// The direction is taken from the bounds, so `step` must be positive.
    /// `errf` is included when it lies on the sequence, and no value passes it.
    pub fn arithmetic(err0: Float, errf: Float, step: Float) -> Result<Self> {
        check_bound(err0)?;
        check_bound(errf)?;
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::InvalidSweepStep(step));
        }

        let span = (errf - err0).abs();
        let delta = if errf < err0 { -step } else { step };
        let n = point_count(span, step, GridBound::Inclusive)?;
        let steps = (0..n)
            .map(|i| err0 + i as Float * delta)
            .map(|v| if delta < 0.0 { v.max(errf) } else { v.min(errf) })
            .collect();

        Ok(Self { steps })
    }

    /// Build the sweep selected by `params.err_mode`.
    pub fn from_parameters(params: &Parameters) -> Result<Self> {
        match params.err_mode {
            ErrMode::Linspace => Self::linspace(params.err0, params.errf, params.n_err_steps),
            ErrMode::Arithmetic => {
                let step = params
                    .err_step
                    .ok_or(Error::MissingSweepParameter("err_step"))?;
                Self::arithmetic(params.err0, params.errf, step)
            }
        }
    }

    /// A sweep holding a single step size.
    pub fn single(step: Float) -> Result<Self> {
        Self::linspace(step, step, 1)
    }

    pub fn steps(&self) -> &[Float] {
        &self.steps
    }
}

impl Deref for StepSweep {
    type Target = [Float];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
