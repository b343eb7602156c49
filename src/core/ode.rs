//! User-supplied ODE right-hand side and closed-form solution.

use crate::{Float, error::{Error, Result}};

/// Right-hand side of a scalar first-order ODE y' = f(x, y).
///
/// Implement this trait for your problem. The integrators call `ode` with the
/// current abscissa `x` and state `y` and expect the derivative back. Points
/// where `f` is undefined must return a domain error rather than a sentinel
/// value, so the failure reaches the caller.
///
/// # Example
///
/// ```
/// use ivp_errors::{Float, ODE, Result};
///
/// struct Decay;
/// impl ODE for Decay {
///     fn ode(&self, _x: Float, y: Float) -> Result<Float> {
///         Ok(-y)
///     }
/// }
/// assert_eq!(Decay.ode(0.0, 2.0).unwrap(), -2.0);
/// ```
pub trait ODE {
    fn ode(&self, x: Float, y: Float) -> Result<Float>;
}

/// Closed-form solution y(x) used as ground truth for error measurement.
pub trait ExactSolution {
    fn exact(&self, x: Float) -> Result<Float>;
}

/// A problem that can be both integrated and checked against its exact solution.
pub trait Problem: ODE + ExactSolution {}

impl<T: ODE + ExactSolution> Problem for T {}

impl<T: ODE + ?Sized> ODE for &T {
    fn ode(&self, x: Float, y: Float) -> Result<Float> {
        (**self).ode(x, y)
    }
}

impl<T: ExactSolution + ?Sized> ExactSolution for &T {
    fn exact(&self, x: Float) -> Result<Float> {
        (**self).exact(x)
    }
}

/// y' = x/y + y/x with exact solution y = x * sqrt(2 ln x + 1).
///
/// The exact solution passes through (1, 1), so `y0 = 1` at `x0 = 1` matches it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomogeneousODE;

impl ODE for HomogeneousODE {
    fn ode(&self, x: Float, y: Float) -> Result<Float> {
        if x == 0.0 || y == 0.0 {
            return Err(Error::DivisionByZero { x, y });
        }
        Ok(x / y + y / x)
    }
}

impl ExactSolution for HomogeneousODE {
    fn exact(&self, x: Float) -> Result<Float> {
        if x.is_nan() || x <= 0.0 {
            return Err(Error::ExactOutOfDomain { x });
        }
        let radicand = 2.0 * x.ln() + 1.0;
        if radicand.is_nan() || radicand < 0.0 {
            return Err(Error::ExactOutOfDomain { x });
        }
        Ok(x * radicand.sqrt())
    }
}

/// Adapter pairing two closures into a [`Problem`].
///
/// ```
/// use ivp_errors::{FnProblem, ODE, ExactSolution, Float};
///
/// let p = FnProblem::new(
///     |_x: Float, y: Float| Ok(y),
///     |x: Float| Ok(x.exp()),
/// );
/// assert_eq!(p.ode(0.0, 3.0).unwrap(), 3.0);
/// assert_eq!(p.exact(0.0).unwrap(), 1.0);
/// ```
#[derive(Clone)]
pub struct FnProblem<F, E> {
    f: F,
    exact: E,
}

impl<F, E> FnProblem<F, E>
where
    F: Fn(Float, Float) -> Result<Float>,
    E: Fn(Float) -> Result<Float>,
{
    pub fn new(f: F, exact: E) -> Self {
        Self { f, exact }
    }
}

impl<F, E> ODE for FnProblem<F, E>
where
    F: Fn(Float, Float) -> Result<Float>,
{
    fn ode(&self, x: Float, y: Float) -> Result<Float> {
        (self.f)(x, y)
    }
}

impl<F, E> ExactSolution for FnProblem<F, E>
where
    E: Fn(Float) -> Result<Float>,
{
    fn exact(&self, x: Float) -> Result<Float> {
        (self.exact)(x)
    }
}
