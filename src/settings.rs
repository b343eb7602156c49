//! Parameters for the default grid and the error sweep

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    Float,
    analysis::Reduction,
    core::grid::{Grid, GridBound, point_count},
    error::{Error, Result},
    sweep::{ErrMode, StepSweep},
};

#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Already-resolved numeric parameters.
///
/// Loading them from a file is left to the caller; any serde format works.
pub struct Parameters {
    /// Start of the default grid.
    #[builder(default = 1.0)]
    pub x0: Float,
    /// End of the default grid.
    #[builder(default = 2.3)]
    pub xf: Float,
    /// Step of the default grid.
    #[builder(default = 0.1)]
    pub h: Float,
    /// Initial value for the approximate integrators.
    #[builder(default = 1.0)]
    pub y0: Float,
    /// First step size of the sweep.
    #[builder(default = 0.1)]
    pub err0: Float,
    /// Last step size of the sweep.
    #[builder(default = 0.01)]
    pub errf: Float,
    /// Number of sweep points in [`ErrMode::Linspace`] mode.
    #[builder(default = 5)]
    pub n_err_steps: usize,
    /// Increment between sweep points in [`ErrMode::Arithmetic`] mode.
    pub err_step: Option<Float>,
    /// Sweep generation policy. Default: linspace.
    #[builder(default)]
    pub err_mode: ErrMode,
    /// How a swept run's local errors are reduced to one number. Default: max.
    #[builder(default)]
    pub reduction: Reduction,
    /// Whether `xf` belongs to the grids. Default: inclusive.
    #[builder(default)]
    pub grid_bound: GridBound,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters::builder().build()
    }
}

impl Parameters {
    /// Check every parameter before any computation starts.
    pub fn validate(&self) -> Result<()> {
        if !self.y0.is_finite() {
            return Err(Error::NonFiniteParameter("y0"));
        }
        self.grid()?;
        // Every swept grid must be buildable too.
        for &step in self.sweep()?.iter() {
            point_count(self.xf - self.x0, step, self.grid_bound)?;
        }
        Ok(())
    }

    /// The default grid described by `x0`, `xf`, `h` and `grid_bound`.
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.x0, self.xf, self.h, self.grid_bound)
    }

    /// The step sweep described by the `err*` fields.
    pub fn sweep(&self) -> Result<StepSweep> {
        StepSweep::from_parameters(self)
    }
}
