//! Errors for grid construction, integration and error analysis

use thiserror::Error;

use crate::Float;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration and domain errors.
///
/// Configuration errors are raised before any computation starts. Domain
/// errors are raised at the evaluation point where the right-hand side or the
/// exact solution is undefined and are never suppressed internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("step size h must be positive and finite (got {0})")]
    InvalidStepSize(Float),
    #[error("interval end xf must not precede x0 (got x0 = {x0}, xf = {xf})")]
    InvalidInterval { x0: Float, xf: Float },
    #[error("grid contains no points")]
    EmptyGrid,
    #[error("span {span} with step {step} needs more than {max} points", max = crate::core::grid::MAX_POINTS)]
    TooManyPoints { span: Float, step: Float },
    #[error("sweep bounds must be positive and finite (got {0})")]
    InvalidSweepBound(Float),
    #[error("sweep must contain at least one step size (got {0})")]
    InvalidSweepCount(usize),
    #[error("sweep increment must be positive and finite (got {0})")]
    InvalidSweepStep(Float),
    #[error("sweep mode requires `{0}` to be set")]
    MissingSweepParameter(&'static str),
    #[error("unrecognized err_mode `{0}` (expected `linspace` or `arithmetic`)")]
    UnknownErrMode(String),
    #[error("unrecognized reduction `{0}` (expected `max`, `sum` or `final`)")]
    UnknownReduction(String),
    #[error("unrecognized grid bound `{0}` (expected `inclusive` or `exclusive`)")]
    UnknownGridBound(String),
    #[error("unrecognized method `{0}`")]
    UnknownMethod(String),
    #[error("parameter `{0}` must be finite")]
    NonFiniteParameter(&'static str),

    #[error("division by zero evaluating f at x = {x}, y = {y}")]
    DivisionByZero { x: Float, y: Float },
    #[error("exact solution is undefined at x = {x}")]
    ExactOutOfDomain { x: Float },

    #[error("sweep failed at step size {step}: {source}")]
    Sweep {
        step: Float,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// True for errors raised while validating parameters.
    pub fn is_configuration(&self) -> bool {
        !self.is_domain()
    }

    /// True for evaluation errors of the right-hand side or exact solution,
    /// including those wrapped with sweep context.
    pub fn is_domain(&self) -> bool {
        match self {
            Error::DivisionByZero { .. } | Error::ExactOutOfDomain { .. } => true,
            Error::Sweep { source, .. } => source.is_domain(),
            _ => false,
        }
    }
}
