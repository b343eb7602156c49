//! Fixed-step integrators for a scalar first-order ODE y' = f(x, y), compared
//! against a closed-form solution as a function of step size.
//!
//! The crate provides:
//! - [`Grid`]: uniform sample points from (x0, xf, h).
//! - [`methods`]: the exact solution, explicit Euler, improved Euler (Heun)
//!   and classic Runge-Kutta 4, each mapping a grid and y0 to a [`Solution`].
//! - [`ValuesCache`]: the default grid and memoized series of all four methods.
//! - [`ErrorAnalyzer`]: local errors on the default grid and reduced global
//!   errors over a [`StepSweep`] of step sizes.
//! - [`report::run`]: one call computing everything for a [`Parameters`] set.
//!
//! ```
//! use ivp_errors::prelude::*;
//!
//! let params = Parameters::builder().x0(1.0).xf(2.3).h(0.1).y0(1.0).build();
//! let cache = ValuesCache::new(HomogeneousODE, params).unwrap();
//! let values = cache.values().unwrap();
//! assert_eq!(cache.grid().len(), 14);
//! assert!((values.euler[1] - 1.2).abs() < 1e-12);
//!
//! let analyzer = ErrorAnalyzer::new(&cache).unwrap();
//! let rk4 = analyzer.global_errors(Method::RungeKutta4).unwrap();
//! let euler = analyzer.global_errors(Method::Euler).unwrap();
//! assert!(rk4.errors[0] < euler.errors[0]);
//! ```

mod core;
mod error;

pub mod analysis;
pub mod cache;
pub mod convergence;
pub mod methods;
pub mod prelude;
pub mod report;
pub mod settings;
pub mod sweep;

#[cfg(feature = "python")]
mod python;

pub use analysis::{ErrorAnalyzer, GlobalErrors, Reduction};
pub use cache::{Values, ValuesCache};
pub use crate::core::{
    grid::{Grid, GridBound, MAX_POINTS},
    ode::{ExactSolution, FnProblem, HomogeneousODE, ODE, Problem},
    solution::Solution,
};
pub use error::{Error, Result};
pub use methods::Method;
pub use settings::Parameters;
pub use sweep::{ErrMode, StepSweep};

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f64 or f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
