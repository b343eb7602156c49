//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use ivp_errors::prelude::*;
//! ```

pub use crate::{
    Float,
    analysis::{ErrorAnalyzer, GlobalErrors, Reduction},
    cache::{Values, ValuesCache},
    core::{
        grid::{Grid, GridBound},
        ode::{ExactSolution, FnProblem, HomogeneousODE, ODE, Problem},
        solution::Solution,
    },
    error::{Error, Result},
    methods::Method,
    report::{MethodReport, Report, run, run_with},
    settings::Parameters,
    sweep::{ErrMode, StepSweep},
};
